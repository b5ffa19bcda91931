use oppidum_types::{
    buildings::Building,
    common::{Stat, StatLine},
    traits::TraitTable,
};

/// Sums trait bonuses across a set of chosen buildings.
///
/// A building with no trait, or a trait absent from the table, contributes
/// zero. Bonuses are counted once per occurrence, never deduplicated by name.
pub fn sum_trait_bonuses<'a, I>(buildings: I, table: &TraitTable) -> StatLine
where
    I: IntoIterator<Item = &'a Building>,
{
    let mut total = StatLine::default();
    for building in buildings {
        if let Some(name) = building.trait_name.as_deref()
            && let Some(effect) = table.get(name)
        {
            total = total + effect.bonus.clone();
        }
    }
    total
}

/// Lazy (trait name, description) pairs for every chosen building whose
/// trait resolves to a non-empty free-text effect. Input order is preserved
/// and a trait appears once per matching building.
pub fn extra_effects<'a, I>(
    buildings: I,
    table: &'a TraitTable,
) -> impl Iterator<Item = (&'a str, &'a str)>
where
    I: IntoIterator<Item = &'a Building> + 'a,
{
    buildings.into_iter().filter_map(move |building| {
        let name = building.trait_name.as_deref()?;
        let extra = table.get(name)?.extra.as_deref()?;
        if extra.is_empty() {
            return None;
        }
        Some((name, extra))
    })
}

/// Short human description of a building's trait.
///
/// Empty when the building has none; a "(no effect defined)" marker when the
/// trait is unknown; otherwise the non-zero stat deltas, falling back to the
/// free-text effect or the bare trait name when every delta is zero.
pub fn describe_trait(building: &Building, table: &TraitTable) -> String {
    let Some(name) = building.trait_name.as_deref() else {
        return String::new();
    };
    let Some(effect) = table.get(name) else {
        return format!("{name} (no effect defined)");
    };

    let deltas: Vec<String> = Stat::ALL
        .into_iter()
        .filter(|stat| effect.bonus.get(*stat) > 0)
        .map(|stat| format!("{}+{}", stat.abbr(), effect.bonus.get(stat)))
        .collect();

    if !deltas.is_empty() {
        return deltas.join(" ");
    }

    match effect.extra.as_deref() {
        Some(extra) if !extra.is_empty() => extra.to_string(),
        _ => name.to_string(),
    }
}
