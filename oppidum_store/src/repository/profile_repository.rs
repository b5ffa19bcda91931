use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use uuid::Uuid;

use oppidum_app::repository::ProfileRepository;
use oppidum_types::{
    errors::{AppError, ApplicationError},
    profile::SearchProfile,
};

use super::{read_store, write_store};

/// Implements ProfileRepository on a single JSON file.
pub struct JsonProfileRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles against the file.
    lock: Mutex<()>,
}

impl JsonProfileRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("profiles.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for JsonProfileRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<SearchProfile, ApplicationError> {
        let profiles: Vec<SearchProfile> = read_store(&self.path).await?;
        profiles
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::ProfileNotFound(id).into())
    }

    async fn list(&self) -> Result<Vec<SearchProfile>, ApplicationError> {
        let mut profiles: Vec<SearchProfile> = read_store(&self.path).await?;
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn save(&self, profile: &SearchProfile) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().await;

        let mut profiles: Vec<SearchProfile> = read_store(&self.path).await?;
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }

        write_store(&self.path, &profiles).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().await;

        let mut profiles: Vec<SearchProfile> = read_store(&self.path).await?;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        if profiles.len() == before {
            return Err(AppError::ProfileNotFound(id).into());
        }

        write_store(&self.path, &profiles).await
    }
}
