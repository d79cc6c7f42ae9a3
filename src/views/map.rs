use crate::error::Result;
use crate::query::{coerce_numeric, filter_equals, sort_table_descending};
use crate::table::{Table, AREA, CANCER_TYPE, CODE};
use crate::views::Measure;
use serde::Serialize;

/// One region on the US map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    pub code: String,
    pub area: String,
    pub value: Option<i64>,
}

/// `measure` per state for `cancer_type`, largest first; states with a
/// missing count come last with no value.
pub fn choropleth(table: &Table, cancer_type: &str, measure: Measure) -> Result<Vec<MapPoint>> {
    let field = measure.as_str();
    let rows = filter_equals(table, CANCER_TYPE, cancer_type)?;
    let rows = coerce_numeric(&rows, field)?;
    let rows = sort_table_descending(&rows, field)?;

    let points = rows
        .strings(CODE)?
        .into_iter()
        .zip(rows.strings(AREA)?)
        .zip(rows.numbers(field)?)
        .map(|((code, area), value)| MapPoint { code, area, value })
        .collect();
    Ok(points)
}
