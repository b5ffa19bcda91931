use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use oppidum_types::{
    buildings::Building,
    errors::{AppError, ApplicationError},
    profile::SearchProfile,
};

use crate::repository::{CollectionRepository, ProfileRepository, Repositories};

/// In-memory profile store for handler tests.
#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<HashMap<Uuid, SearchProfile>>,
}

#[async_trait::async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<SearchProfile, ApplicationError> {
        self.profiles
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::ProfileNotFound(id).into())
    }

    async fn list(&self) -> Result<Vec<SearchProfile>, ApplicationError> {
        let mut profiles: Vec<SearchProfile> =
            self.profiles.lock().await.values().cloned().collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn save(&self, profile: &SearchProfile) -> Result<(), ApplicationError> {
        self.profiles
            .lock()
            .await
            .insert(profile.id, profile.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        self.profiles
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::ProfileNotFound(id).into())
    }
}

/// In-memory collection store for handler tests.
#[derive(Default)]
pub struct MockCollectionRepository {
    buildings: Mutex<Vec<Building>>,
}

#[async_trait::async_trait]
impl CollectionRepository for MockCollectionRepository {
    async fn list(&self) -> Result<Vec<Building>, ApplicationError> {
        Ok(self.buildings.lock().await.clone())
    }

    async fn save(&self, buildings: &[Building]) -> Result<(), ApplicationError> {
        *self.buildings.lock().await = buildings.to_vec();
        Ok(())
    }
}

pub fn mock_repositories() -> Repositories {
    Repositories {
        profiles: Arc::new(MockProfileRepository::default()),
        collection: Arc::new(MockCollectionRepository::default()),
    }
}
