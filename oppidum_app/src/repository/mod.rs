use std::sync::Arc;

use uuid::Uuid;

use oppidum_types::{buildings::Building, errors::ApplicationError, profile::SearchProfile};

/// Saved search configurations.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<SearchProfile, ApplicationError>;
    async fn list(&self) -> Result<Vec<SearchProfile>, ApplicationError>;
    async fn save(&self, profile: &SearchProfile) -> Result<(), ApplicationError>;
    async fn delete(&self, id: Uuid) -> Result<(), ApplicationError>;
}

/// The player-owned building collection, persisted as a whole.
#[async_trait::async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Building>, ApplicationError>;
    async fn save(&self, buildings: &[Building]) -> Result<(), ApplicationError>;
}

/// Repository handles shared by command and query handlers.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub collection: Arc<dyn CollectionRepository>,
}
