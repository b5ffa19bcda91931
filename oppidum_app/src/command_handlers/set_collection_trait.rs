use std::sync::Arc;

use oppidum_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SetCollectionTrait},
    repository::{CollectionRepository, Repositories},
};

pub struct SetCollectionTraitCommandHandler {}

impl Default for SetCollectionTraitCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SetCollectionTraitCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SetCollectionTrait> for SetCollectionTraitCommandHandler {
    async fn handle(
        &self,
        cmd: SetCollectionTrait,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let mut buildings = repos.collection.list().await?;

        let idx = buildings
            .iter()
            .position(|b| b.id == cmd.building_id)
            .ok_or(AppError::NotInCollection(cmd.building_id))?;
        buildings[idx] = buildings[idx].with_trait(cmd.trait_name.clone());

        repos.collection.save(&buildings).await?;

        tracing::info!(
            building_id = cmd.building_id,
            trait_name = cmd.trait_name.as_deref().unwrap_or("(none)"),
            "rebound collection trait"
        );
        Ok(())
    }
}
