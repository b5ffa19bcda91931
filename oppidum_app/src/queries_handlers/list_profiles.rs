use async_trait::async_trait;
use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListProfiles},
    repository::{ProfileRepository, Repositories},
};

pub struct ListProfilesHandler {}

impl Default for ListProfilesHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListProfilesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListProfiles> for ListProfilesHandler {
    async fn handle(
        &self,
        _query: ListProfiles,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<<ListProfiles as Query>::Output, ApplicationError> {
        repos.profiles.list().await
    }
}
