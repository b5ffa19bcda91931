use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::StatLine;

/// Numeric bonuses granted by a named building trait, plus an optional
/// free-text effect that carries no numeric value but is surfaced to the
/// player as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitEffect {
    pub bonus: StatLine,
    pub extra: Option<String>,
}

impl TraitEffect {
    pub fn new(bonus: StatLine) -> Self {
        Self { bonus, extra: None }
    }

    pub fn with_extra(bonus: StatLine, extra: impl Into<String>) -> Self {
        Self {
            bonus,
            extra: Some(extra.into()),
        }
    }
}

/// Trait name to effect. A missing key means zero bonus and no extra effect.
pub type TraitTable = HashMap<String, TraitEffect>;
