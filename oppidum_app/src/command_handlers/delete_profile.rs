use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteProfile},
    repository::{ProfileRepository, Repositories},
};

pub struct DeleteProfileCommandHandler {}

impl Default for DeleteProfileCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteProfileCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteProfile> for DeleteProfileCommandHandler {
    async fn handle(
        &self,
        cmd: DeleteProfile,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        repos.profiles.delete(cmd.id).await?;
        tracing::info!(profile_id = %cmd.id, "deleted search profile");
        Ok(())
    }
}
