use std::fmt::Write;

use oppidum_game::{
    models::bonus,
    solver::CombinationResult,
    thresholds::{self, ThresholdGrade},
};
use oppidum_types::{common::Stat, traits::TraitTable};

/// Renders one ranked combination as a result card.
pub fn render_result(rank: usize, result: &CombinationResult, table: &TraitTable) -> String {
    let mut card = String::new();

    let _ = writeln!(card, "#{rank}  score {}/16", result.score);

    for (slot, building) in &result.picks {
        let trait_desc = bonus::describe_trait(building, table);
        if trait_desc.is_empty() {
            let _ = writeln!(card, "  {:<14} {}", slot.label(), building.name);
        } else {
            let _ = writeln!(card, "  {:<14} {}  [{}]", slot.label(), building.name, trait_desc);
        }
    }

    for (stat, count) in Stat::ALL.iter().zip(result.threshold_counts) {
        let _ = writeln!(
            card,
            "  {:<12} {:>4}  {}  {}",
            stat.label(),
            result.totals.get(*stat),
            thresholds::threshold_gauge(count),
            ThresholdGrade::from_count(count).label(),
        );
    }

    let chosen = result.picks.iter().map(|(_, building)| building);
    for (name, text) in bonus::extra_effects(chosen, table) {
        let _ = writeln!(card, "  * {name}: {text}");
    }

    card
}

#[cfg(test)]
mod tests {
    use oppidum_game::{models::catalog::SlotCandidates, solver};
    use oppidum_types::{
        buildings::{Building, SlotCategory},
        common::StatLine,
        slots::{EnabledSlots, SlotId},
        traits::TraitEffect,
    };

    use super::*;

    #[test]
    fn test_render_includes_slots_totals_and_effects() {
        let mut candidates = SlotCandidates::new();
        let mut hall = Building::new(
            1,
            "Great Hall",
            SlotCategory::MainHall,
            StatLine::new(60, 0, 0, 0),
        );
        hall.trait_name = Some("Renowned".to_string());
        candidates.push(SlotId::MainHall, hall);

        let mut enabled = EnabledSlots::none();
        enabled.set(SlotId::MainHall, true);

        let mut table = TraitTable::new();
        table.insert(
            "Renowned".to_string(),
            TraitEffect::with_extra(StatLine::default(), "attracts travelling merchants"),
        );

        let results = solver::search(&candidates, &enabled, &StatLine::default(), &table, 1);
        let card = render_result(1, &results[0], &table);

        assert!(card.contains("main hall"));
        assert!(card.contains("Great Hall"));
        assert!(card.contains("agriculture"));
        assert!(card.contains("●●○○"), "60 agriculture meets two tiers");
        assert!(card.contains("* Renowned: attracts travelling merchants"));
    }
}
