use std::path::Path;

use oppidum_types::{
    common::StatLine,
    errors::{ApplicationError, StoreError},
    traits::{TraitEffect, TraitTable},
};

use super::{find_column, stat_cell, text_cell};

const TRAIT_HEADERS: &[&str] = &["trait", "name", "trait_name"];
const AGRICULTURE_HEADERS: &[&str] = &["agriculture", "agri", "farm"];
const MINING_HEADERS: &[&str] = &["mining", "mine", "ore"];
const MILITARY_HEADERS: &[&str] = &["military", "troops", "army"];
const COMMERCE_HEADERS: &[&str] = &["commerce", "trade", "gold"];
const EXTRA_HEADERS: &[&str] = &["extra", "effect", "extra_effect", "description"];

/// Loads the trait-name to effect mapping from a headed CSV file.
///
/// Later rows win on duplicate trait names. Rows without a trait name are
/// skipped with a warning.
pub fn load_trait_table_csv(path: &Path) -> Result<TraitTable, ApplicationError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)
        .map_err(StoreError::Csv)?;

    let headers = reader.headers().map_err(StoreError::Csv)?.clone();
    let name_column = find_column(&headers, TRAIT_HEADERS).ok_or(StoreError::MissingColumn {
        column: "trait",
        path: path.display().to_string(),
    })?;
    let agriculture = find_column(&headers, AGRICULTURE_HEADERS);
    let mining = find_column(&headers, MINING_HEADERS);
    let military = find_column(&headers, MILITARY_HEADERS);
    let commerce = find_column(&headers, COMMERCE_HEADERS);
    let extra = find_column(&headers, EXTRA_HEADERS);

    let mut table = TraitTable::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(StoreError::Csv)?;

        let Some(name) = text_cell(&record, Some(name_column)) else {
            tracing::warn!(row, "skipping trait row without a name");
            continue;
        };

        let bonus = StatLine::new(
            stat_cell(&record, agriculture),
            stat_cell(&record, mining),
            stat_cell(&record, military),
            stat_cell(&record, commerce),
        );

        table.insert(
            name,
            TraitEffect {
                bonus,
                extra: text_cell(&record, extra),
            },
        );
    }

    tracing::info!(count = table.len(), path = %path.display(), "loaded trait table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_load_trait_table() {
        let file = write_csv(
            "trait,agriculture,mining,military,commerce,extra\n\
             Fertile,5,0,0,2,\n\
             Renowned,0,0,0,0,attracts travelling merchants\n",
        );

        let table = load_trait_table_csv(file.path()).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table["Fertile"],
            TraitEffect::new(StatLine::new(5, 0, 0, 2))
        );
        assert_eq!(
            table["Renowned"].extra.as_deref(),
            Some("attracts travelling merchants")
        );
    }

    #[test]
    fn test_rows_without_name_are_skipped() {
        let file = write_csv(
            "trait,agriculture\n\
             ,5\n\
             Fertile,3\n",
        );

        let table = load_trait_table_csv(file.path()).expect("load");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_trait_column_is_an_error() {
        let file = write_csv("agriculture,mining\n1,2\n");

        let result = load_trait_table_csv(file.path());
        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::MissingColumn { column: "trait", .. }))
        ));
    }
}
