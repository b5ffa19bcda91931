use std::sync::atomic::{AtomicBool, Ordering};

use oppidum_types::{
    buildings::Building,
    common::StatLine,
    slots::{EnabledSlots, SlotId},
    traits::TraitTable,
};

use crate::{
    models::{bonus, catalog::SlotCandidates},
    thresholds,
};

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Above this many combinations a caller should warn or abort before
/// searching; enforcing that is caller policy, never the solver's.
pub const RECOMMENDED_COMBINATION_CEILING: u64 = 1_000_000;

/// One building per enabled slot, with aggregate totals and threshold score.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationResult {
    /// Chosen buildings in canonical slot order.
    pub picks: Vec<(SlotId, Building)>,
    /// Base stats plus trait bonuses.
    pub totals: StatLine,
    /// Tiers met per stat, canonical stat order (0..=4 each).
    pub threshold_counts: [u8; 4],
    /// Sum of the per-stat counts (0..=16).
    pub score: u8,
}

/// Lazy depth-first enumeration of the cartesian product of per-slot
/// candidate lists.
///
/// Slots are visited in `SlotId::ALL` order with the last slot varying
/// fastest, so items come out in slot-major order. Enabled slots with an
/// empty candidate list are dropped from the enumeration entirely. Laziness
/// keeps memory bounded and lets a caller stop mid-product.
pub struct Search<'a> {
    slots: Vec<(SlotId, &'a [Building])>,
    cursor: Vec<usize>,
    trait_table: &'a TraitTable,
    exhausted: bool,
}

impl<'a> Search<'a> {
    pub fn new(
        candidates: &'a SlotCandidates,
        enabled: &EnabledSlots,
        trait_table: &'a TraitTable,
    ) -> Self {
        let slots: Vec<(SlotId, &[Building])> = enabled
            .iter_enabled()
            .map(|slot| (slot, candidates.candidates(slot)))
            .filter(|(_, list)| !list.is_empty())
            .collect();

        // No surviving slot means zero combinations, not one empty one.
        let exhausted = slots.is_empty();
        let cursor = vec![0; slots.len()];

        Self {
            slots,
            cursor,
            trait_table,
            exhausted,
        }
    }

    fn current(&self) -> CombinationResult {
        let picks: Vec<(SlotId, Building)> = self
            .slots
            .iter()
            .zip(&self.cursor)
            .map(|((slot, list), &idx)| (*slot, list[idx].clone()))
            .collect();

        let mut totals = StatLine::default();
        for (_, building) in &picks {
            totals = totals + building.stats.clone();
        }
        totals = totals + bonus::sum_trait_bonuses(picks.iter().map(|(_, b)| b), self.trait_table);

        let threshold_counts = thresholds::count_all(&totals);
        let score = threshold_counts.iter().sum();

        CombinationResult {
            picks,
            totals,
            threshold_counts,
            score,
        }
    }

    fn advance(&mut self) {
        for i in (0..self.cursor.len()).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.slots[i].1.len() {
                return;
            }
            self.cursor[i] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Search<'_> {
    type Item = CombinationResult;

    fn next(&mut self) -> Option<CombinationResult> {
        if self.exhausted {
            return None;
        }
        let result = self.current();
        self.advance();
        Some(result)
    }
}

/// Enumerates every admissible combination, keeps those meeting the targets,
/// ranks by descending threshold score and truncates to `max_results`.
///
/// Ties keep the enumeration order (stable sort). A `max_results` of 0 is
/// normalized to 1 rather than rejected. Unreachable targets yield an empty
/// list, never an error.
pub fn search(
    candidates: &SlotCandidates,
    enabled: &EnabledSlots,
    targets: &StatLine,
    trait_table: &TraitTable,
    max_results: usize,
) -> Vec<CombinationResult> {
    let never = AtomicBool::new(false);
    search_with_cancel(candidates, enabled, targets, trait_table, max_results, &never)
        .unwrap_or_default()
}

/// Like [`search`], checking the cancel flag between combinations. Returns
/// `None` if the flag was raised before the enumeration finished.
pub fn search_with_cancel(
    candidates: &SlotCandidates,
    enabled: &EnabledSlots,
    targets: &StatLine,
    trait_table: &TraitTable,
    max_results: usize,
    cancel: &AtomicBool,
) -> Option<Vec<CombinationResult>> {
    let max_results = max_results.max(1);

    let mut kept = Vec::new();
    for result in Search::new(candidates, enabled, trait_table) {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        if result.totals.meets(targets) {
            kept.push(result);
        }
    }

    kept.sort_by(|a, b| b.score.cmp(&a.score));
    kept.truncate(max_results);
    Some(kept)
}

/// Product of candidate-list sizes across enabled, non-empty slots; the
/// pre-flight cost of a [`search`] over the same inputs. Returns 0 when no
/// slot survives, matching `search`'s empty result.
pub fn estimate_combinations(candidates: &SlotCandidates, enabled: &EnabledSlots) -> u64 {
    let mut estimate: u64 = 1;
    let mut active = 0usize;

    for slot in enabled.iter_enabled() {
        let size = candidates.candidates(slot).len() as u64;
        if size == 0 {
            continue;
        }
        active += 1;
        estimate = estimate.saturating_mul(size);
    }

    if active == 0 { 0 } else { estimate }
}
