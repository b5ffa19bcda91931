use thiserror::Error;
use uuid::Uuid;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search profile {0} not found")]
    ProfileNotFound(Uuid),

    #[error("Building {0} is not in the collection")]
    NotInCollection(u32),

    #[error("Search was superseded by a newer request")]
    SearchSuperseded,

    #[error("Estimated {estimated} combinations exceeds the ceiling of {ceiling}")]
    CombinationCeiling { estimated: u64, ceiling: u64 },
}
