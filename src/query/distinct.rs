use crate::error::Result;
use crate::table::Table;
use std::collections::HashSet;

/// Distinct non-empty values of a text `field`, in first-seen order.
pub fn distinct_values(table: &Table, field: &str) -> Result<Vec<String>> {
    let col = table.utf8_column(field)?;
    let mut seen = HashSet::new();
    Ok(col
        .iter()
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect())
}
