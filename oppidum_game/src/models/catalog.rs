use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use oppidum_types::{
    buildings::{Building, SlotCategory},
    slots::SlotId,
};

/// Per-slot candidate lists, post fan-out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotCandidates {
    by_slot: HashMap<SlotId, Vec<Building>>,
}

impl SlotCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: SlotId, building: Building) {
        self.by_slot.entry(slot).or_default().push(building);
    }

    /// Candidates for a slot. A slot nothing was routed to is empty, which
    /// the solver treats as an absent slot rather than an infeasible one.
    pub fn candidates(&self, slot: SlotId) -> &[Building] {
        self.by_slot.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The ingested building catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    buildings: Vec<Building>,
}

impl Catalog {
    pub fn from_buildings(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Routes every building to the physical slots it may occupy.
    ///
    /// Market buildings without a position fan out to all four market slots,
    /// so one building can be a candidate in several slots of the same
    /// search. Positioned market buildings land only on their sub-slot.
    pub fn slot_candidates(&self) -> SlotCandidates {
        let mut candidates = SlotCandidates::new();

        for building in &self.buildings {
            match building.category {
                SlotCategory::MainHall => candidates.push(SlotId::MainHall, building.clone()),
                SlotCategory::CityWall => candidates.push(SlotId::CityWall, building.clone()),
                SlotCategory::Plaza => candidates.push(SlotId::Plaza, building.clone()),
                SlotCategory::Market => match building.position {
                    Some(position) => {
                        if let Some(slot) = SlotId::ALL
                            .into_iter()
                            .find(|s| s.market_position() == Some(position))
                        {
                            candidates.push(slot, building.clone());
                        }
                    }
                    None => {
                        for slot in SlotId::ALL {
                            if slot.category() == SlotCategory::Market {
                                candidates.push(slot, building.clone());
                            }
                        }
                    }
                },
            }
        }

        candidates
    }
}
