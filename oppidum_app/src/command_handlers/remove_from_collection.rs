use std::sync::Arc;

use oppidum_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RemoveFromCollection},
    repository::{CollectionRepository, Repositories},
};

pub struct RemoveFromCollectionCommandHandler {}

impl Default for RemoveFromCollectionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveFromCollectionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RemoveFromCollection> for RemoveFromCollectionCommandHandler {
    async fn handle(
        &self,
        cmd: RemoveFromCollection,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let mut buildings = repos.collection.list().await?;

        // Removes one copy only, keeping the rest.
        let idx = buildings
            .iter()
            .position(|b| b.id == cmd.building_id)
            .ok_or(AppError::NotInCollection(cmd.building_id))?;
        buildings.remove(idx);

        repos.collection.save(&buildings).await?;
        Ok(())
    }
}
