use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::StatLine, slots::EnabledSlots};

/// A saved search configuration, owned by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProfile {
    pub id: Uuid,
    pub name: String,
    pub enabled: EnabledSlots,
    pub targets: StatLine,
    pub max_results: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SearchProfile {
    pub fn new(
        name: impl Into<String>,
        enabled: EnabledSlots,
        targets: StatLine,
        max_results: usize,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            enabled,
            targets,
            max_results,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
