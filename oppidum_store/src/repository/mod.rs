mod collection_repository;
mod profile_repository;

pub use collection_repository::JsonCollectionRepository;
pub use profile_repository::JsonProfileRepository;

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use oppidum_types::errors::{ApplicationError, StoreError};

/// Reads a whole JSON store, treating a missing file as empty.
pub(crate) async fn read_store<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ApplicationError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::Io(e).into()),
    }
}

/// Rewrites a whole JSON store atomically (write to a sibling, then rename).
pub(crate) async fn write_store<T: Serialize>(path: &Path, items: &[T]) -> Result<(), ApplicationError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(StoreError::Io)?;
    }

    let bytes = serde_json::to_vec_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await.map_err(StoreError::Io)?;
    tokio::fs::rename(&tmp, path).await.map_err(StoreError::Io)?;
    Ok(())
}
