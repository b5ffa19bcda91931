mod catalog;
mod traits;

pub use catalog::load_catalog_csv;
pub use traits::load_trait_table_csv;

/// Index of a named column among the CSV headers, matched case-insensitively
/// against the accepted spellings.
pub(crate) fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_ascii_lowercase();
        aliases.iter().any(|alias| header == *alias)
    })
}

/// Numeric coercion for stat cells: a missing, empty or non-numeric value
/// counts as 0.
pub(crate) fn stat_cell(record: &csv::StringRecord, column: Option<usize>) -> u32 {
    column
        .and_then(|idx| record.get(idx))
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Text cell, trimmed; None when the column is absent or the cell empty.
pub(crate) fn text_cell(record: &csv::StringRecord, column: Option<usize>) -> Option<String> {
    let value = column.and_then(|idx| record.get(idx))?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
