use async_trait::async_trait;
use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetCollection},
    repository::{CollectionRepository, Repositories},
};

pub struct GetCollectionHandler {}

impl Default for GetCollectionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetCollectionHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetCollection> for GetCollectionHandler {
    async fn handle(
        &self,
        _query: GetCollection,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<<GetCollection as Query>::Output, ApplicationError> {
        repos.collection.list().await
    }
}
