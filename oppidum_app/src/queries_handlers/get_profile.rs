use async_trait::async_trait;
use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetProfile},
    repository::{ProfileRepository, Repositories},
};

pub struct GetProfileHandler {}

impl Default for GetProfileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetProfileHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetProfile> for GetProfileHandler {
    async fn handle(
        &self,
        query: GetProfile,
        repos: &Repositories,
        _config: &Arc<Config>,
    ) -> Result<<GetProfile as Query>::Output, ApplicationError> {
        repos.profiles.get_by_id(query.id).await
    }
}
