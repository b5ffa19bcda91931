use std::path::Path;

use oppidum_game::models::catalog::Catalog;
use oppidum_types::{
    buildings::{Building, MarketPosition, SlotCategory},
    common::StatLine,
    errors::{ApplicationError, StoreError},
};

use super::{find_column, stat_cell, text_cell};

// Accepted header spellings per field. The mapping from freeform headers to
// typed fields lives here at the boundary and nowhere else.
const ID_HEADERS: &[&str] = &["id", "building_id", "no"];
const NAME_HEADERS: &[&str] = &["name", "building", "building_name"];
const CATEGORY_HEADERS: &[&str] = &["category", "type", "slot"];
const POSITION_HEADERS: &[&str] = &["position", "market_position", "pos"];
const AGRICULTURE_HEADERS: &[&str] = &["agriculture", "agri", "farm"];
const MINING_HEADERS: &[&str] = &["mining", "mine", "ore"];
const MILITARY_HEADERS: &[&str] = &["military", "troops", "army"];
const COMMERCE_HEADERS: &[&str] = &["commerce", "trade", "gold"];
const TRAIT_HEADERS: &[&str] = &["trait", "trait_name", "specialty"];

struct Columns {
    id: Option<usize>,
    name: usize,
    category: usize,
    position: Option<usize>,
    agriculture: Option<usize>,
    mining: Option<usize>,
    military: Option<usize>,
    commerce: Option<usize>,
    trait_name: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, path: &Path) -> Result<Self, StoreError> {
        let missing = |column: &'static str| StoreError::MissingColumn {
            column,
            path: path.display().to_string(),
        };

        Ok(Self {
            id: find_column(headers, ID_HEADERS),
            name: find_column(headers, NAME_HEADERS).ok_or_else(|| missing("name"))?,
            category: find_column(headers, CATEGORY_HEADERS).ok_or_else(|| missing("category"))?,
            position: find_column(headers, POSITION_HEADERS),
            agriculture: find_column(headers, AGRICULTURE_HEADERS),
            mining: find_column(headers, MINING_HEADERS),
            military: find_column(headers, MILITARY_HEADERS),
            commerce: find_column(headers, COMMERCE_HEADERS),
            trait_name: find_column(headers, TRAIT_HEADERS),
        })
    }
}

/// Loads the building catalog from a headed CSV file.
///
/// Rows with an unknown category are skipped with a warning; an unknown
/// market position falls back to generic (fan-out to every market slot);
/// missing ids fall back to the row number.
pub fn load_catalog_csv(path: &Path) -> Result<Catalog, ApplicationError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)
        .map_err(StoreError::Csv)?;

    let headers = reader.headers().map_err(StoreError::Csv)?.clone();
    let columns = Columns::resolve(&headers, path)?;

    let mut buildings = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(StoreError::Csv)?;

        let name = match text_cell(&record, Some(columns.name)) {
            Some(name) => name,
            None => {
                tracing::warn!(row, "skipping catalog row without a name");
                continue;
            }
        };

        let category_text = text_cell(&record, Some(columns.category)).unwrap_or_default();
        let category: SlotCategory = match category_text.parse() {
            Ok(category) => category,
            Err(_) => {
                tracing::warn!(row, category = %category_text, "skipping row with unknown category");
                continue;
            }
        };

        let position = match text_cell(&record, columns.position) {
            Some(text) => match text.parse::<MarketPosition>() {
                Ok(position) => Some(position),
                Err(_) => {
                    tracing::warn!(row, position = %text, "unknown market position, treating as generic");
                    None
                }
            },
            None => None,
        };

        let id = columns
            .id
            .and_then(|idx| record.get(idx))
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(row as u32);

        let stats = StatLine::new(
            stat_cell(&record, columns.agriculture),
            stat_cell(&record, columns.mining),
            stat_cell(&record, columns.military),
            stat_cell(&record, columns.commerce),
        );

        buildings.push(Building {
            id,
            name,
            category,
            position,
            stats,
            trait_name: text_cell(&record, columns.trait_name),
        });
    }

    tracing::info!(count = buildings.len(), path = %path.display(), "loaded building catalog");
    Ok(Catalog::from_buildings(buildings))
}
