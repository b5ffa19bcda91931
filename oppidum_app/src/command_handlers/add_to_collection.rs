use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AddToCollection},
    repository::{CollectionRepository, Repositories},
};

pub struct AddToCollectionCommandHandler {}

impl Default for AddToCollectionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddToCollectionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddToCollection> for AddToCollectionCommandHandler {
    async fn handle(
        &self,
        cmd: AddToCollection,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let mut buildings = repos.collection.list().await?;
        // A player may own several copies of the same building.
        buildings.push(cmd.building);
        repos.collection.save(&buildings).await?;

        tracing::info!(count = buildings.len(), "collection updated");
        Ok(())
    }
}
