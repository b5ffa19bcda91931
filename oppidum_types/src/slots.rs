use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    buildings::{MarketPosition, SlotCategory},
    errors::GameError,
};

/// The seven fixed physical slots of a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    MainHall,
    CityWall,
    Plaza,
    MarketWest1,
    MarketWest2,
    MarketEast1,
    MarketEast2,
}

impl SlotId {
    /// Canonical slot order. The solver enumerates combinations slot-major
    /// in this order, which also fixes the tie-break among equal scores.
    pub const ALL: [SlotId; 7] = [
        SlotId::MainHall,
        SlotId::CityWall,
        SlotId::Plaza,
        SlotId::MarketWest1,
        SlotId::MarketWest2,
        SlotId::MarketEast1,
        SlotId::MarketEast2,
    ];

    pub fn category(&self) -> SlotCategory {
        match self {
            SlotId::MainHall => SlotCategory::MainHall,
            SlotId::CityWall => SlotCategory::CityWall,
            SlotId::Plaza => SlotCategory::Plaza,
            SlotId::MarketWest1
            | SlotId::MarketWest2
            | SlotId::MarketEast1
            | SlotId::MarketEast2 => SlotCategory::Market,
        }
    }

    /// The market sub-slot this slot corresponds to, for positioned buildings.
    pub fn market_position(&self) -> Option<MarketPosition> {
        match self {
            SlotId::MarketWest1 => Some(MarketPosition::West1),
            SlotId::MarketWest2 => Some(MarketPosition::West2),
            SlotId::MarketEast1 => Some(MarketPosition::East1),
            SlotId::MarketEast2 => Some(MarketPosition::East2),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotId::MainHall => "main hall",
            SlotId::CityWall => "city wall",
            SlotId::Plaza => "plaza",
            SlotId::MarketWest1 => "market west 1",
            SlotId::MarketWest2 => "market west 2",
            SlotId::MarketEast1 => "market east 1",
            SlotId::MarketEast2 => "market east 2",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SlotId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "main_hall" | "mainhall" | "hall" => Ok(SlotId::MainHall),
            "city_wall" | "citywall" | "wall" => Ok(SlotId::CityWall),
            "plaza" => Ok(SlotId::Plaza),
            "market_west_1" | "market_west1" | "west1" | "w1" => Ok(SlotId::MarketWest1),
            "market_west_2" | "market_west2" | "west2" | "w2" => Ok(SlotId::MarketWest2),
            "market_east_1" | "market_east1" | "east1" | "e1" => Ok(SlotId::MarketEast1),
            "market_east_2" | "market_east2" | "east2" | "e2" => Ok(SlotId::MarketEast2),
            other => Err(GameError::UnknownSlot(other.to_string())),
        }
    }
}

/// Which slots take part in a search. Disabled slots are excluded from the
/// enumeration entirely, not filled with a null choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledSlots([bool; 7]);

impl EnabledSlots {
    pub fn all() -> Self {
        Self([true; 7])
    }

    pub fn none() -> Self {
        Self([false; 7])
    }

    pub fn is_enabled(&self, slot: SlotId) -> bool {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: SlotId, enabled: bool) {
        self.0[slot.index()] = enabled;
    }

    pub fn disable(&mut self, slot: SlotId) {
        self.set(slot, false);
    }

    /// Enabled slots in canonical order.
    pub fn iter_enabled(&self) -> impl Iterator<Item = SlotId> + '_ {
        SlotId::ALL.into_iter().filter(|s| self.is_enabled(*s))
    }
}

impl Default for EnabledSlots {
    fn default() -> Self {
        Self::all()
    }
}
