use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{common::StatLine, errors::GameError};

/// Slot category a building can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    MainHall,
    CityWall,
    Plaza,
    Market,
}

impl FromStr for SlotCategory {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main_hall" | "main hall" | "mainhall" | "hall" => Ok(SlotCategory::MainHall),
            "city_wall" | "city wall" | "citywall" | "wall" => Ok(SlotCategory::CityWall),
            "plaza" | "square" => Ok(SlotCategory::Plaza),
            "market" | "marketplace" => Ok(SlotCategory::Market),
            other => Err(GameError::UnknownCategory(other.to_string())),
        }
    }
}

/// Sub-slot a market building is pinned to.
///
/// A market building without a position is eligible for every market slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketPosition {
    West1,
    West2,
    East1,
    East2,
}

impl FromStr for MarketPosition {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "west1" | "west_1" | "w1" => Ok(MarketPosition::West1),
            "west2" | "west_2" | "w2" => Ok(MarketPosition::West2),
            "east1" | "east_1" | "e1" => Ok(MarketPosition::East1),
            "east2" | "east_2" | "e2" => Ok(MarketPosition::East2),
            other => Err(GameError::UnknownPosition(other.to_string())),
        }
    }
}

/// A candidate building, read-only once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Stable per source row.
    pub id: u32,
    pub name: String,
    pub category: SlotCategory,
    pub position: Option<MarketPosition>,
    pub stats: StatLine,
    /// None means the building carries no trait.
    pub trait_name: Option<String>,
}

impl Building {
    pub fn new(id: u32, name: impl Into<String>, category: SlotCategory, stats: StatLine) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            position: None,
            stats,
            trait_name: None,
        }
    }

    /// The only mutation path: rebind the trait name when the player
    /// selects a variant of an owned building.
    pub fn with_trait(&self, trait_name: Option<String>) -> Self {
        Self {
            trait_name,
            ..self.clone()
        }
    }
}
