use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SaveProfile},
    repository::{ProfileRepository, Repositories},
};

pub struct SaveProfileCommandHandler {}

impl Default for SaveProfileCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveProfileCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SaveProfile> for SaveProfileCommandHandler {
    async fn handle(
        &self,
        cmd: SaveProfile,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let mut profile = cmd.profile;
        profile.touch();
        repos.profiles.save(&profile).await?;

        tracing::info!(profile_id = %profile.id, name = %profile.name, "saved search profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use oppidum_types::{common::StatLine, profile::SearchProfile, slots::EnabledSlots};

    use super::*;
    use crate::test_utils::mock_repositories;

    #[tokio::test]
    async fn test_save_profile_is_retrievable() -> Result<(), ApplicationError> {
        let repos = mock_repositories();
        let config = Arc::new(Config::from_env());

        let profile = SearchProfile::new(
            "farming push",
            EnabledSlots::all(),
            StatLine::new(100, 0, 0, 0),
            5,
        );
        let profile_id = profile.id;

        let handler = SaveProfileCommandHandler::new();
        handler.handle(SaveProfile { profile }, &repos, &config).await?;

        let stored = repos.profiles.get_by_id(profile_id).await?;
        assert_eq!(stored.name, "farming push");
        assert_eq!(stored.targets, StatLine::new(100, 0, 0, 0));
        Ok(())
    }

    #[tokio::test]
    async fn test_save_profile_overwrites_existing() -> Result<(), ApplicationError> {
        let repos = mock_repositories();
        let config = Arc::new(Config::from_env());
        let handler = SaveProfileCommandHandler::new();

        let mut profile = SearchProfile::new(
            "draft",
            EnabledSlots::all(),
            StatLine::default(),
            5,
        );
        handler
            .handle(SaveProfile { profile: profile.clone() }, &repos, &config)
            .await?;

        profile.name = "final".to_string();
        handler
            .handle(SaveProfile { profile: profile.clone() }, &repos, &config)
            .await?;

        let stored = repos.profiles.get_by_id(profile.id).await?;
        assert_eq!(stored.name, "final");
        assert_eq!(repos.profiles.list().await?.len(), 1, "same id must not duplicate");
        Ok(())
    }
}
