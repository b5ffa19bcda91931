use thiserror::Error;

/// Errors for domain vocabulary (slots, categories, positions).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown slot name: {0}")]
    UnknownSlot(String),

    #[error("Unknown building category: {0}")]
    UnknownCategory(String),

    #[error("Unknown market position: {0}")]
    UnknownPosition(String),
}
