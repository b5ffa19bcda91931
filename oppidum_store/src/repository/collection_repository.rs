use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use oppidum_app::repository::CollectionRepository;
use oppidum_types::{buildings::Building, errors::ApplicationError};

use super::{read_store, write_store};

/// Implements CollectionRepository on a single JSON file.
pub struct JsonCollectionRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonCollectionRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("collection.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl CollectionRepository for JsonCollectionRepository {
    async fn list(&self) -> Result<Vec<Building>, ApplicationError> {
        read_store(&self.path).await
    }

    async fn save(&self, buildings: &[Building]) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().await;
        write_store(&self.path, buildings).await
    }
}

#[cfg(test)]
mod tests {
    use oppidum_types::{buildings::SlotCategory, common::StatLine};

    use super::*;

    #[tokio::test]
    async fn test_collection_roundtrip() -> Result<(), ApplicationError> {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = JsonCollectionRepository::new(dir.path());

        assert!(repo.list().await?.is_empty());

        let teahouse = Building::new(1, "Teahouse", SlotCategory::Market, StatLine::new(0, 0, 0, 8));
        let gardens = Building::new(2, "Gardens", SlotCategory::Plaza, StatLine::new(12, 0, 0, 0));
        repo.save(&[teahouse.clone(), gardens.clone()]).await?;

        assert_eq!(repo.list().await?, vec![teahouse, gardens]);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_replaces_whole_collection() -> Result<(), ApplicationError> {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = JsonCollectionRepository::new(dir.path());

        let teahouse = Building::new(1, "Teahouse", SlotCategory::Market, StatLine::new(0, 0, 0, 8));
        repo.save(&[teahouse]).await?;
        repo.save(&[]).await?;

        assert!(repo.list().await?.is_empty());
        Ok(())
    }
}
