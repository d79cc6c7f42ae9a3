use crate::error::Result;
use crate::query::{coerce_numeric, filter_equals, sort_table_descending};
use crate::table::{Table, AREA, CANCER_TYPE, CASE_COUNT, POPULATION};
use serde::Serialize;

/// Cases of one cancer type against state population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationPoint {
    pub area: String,
    pub population: Option<i64>,
    pub cases: Option<i64>,
}

/// One point per state for `cancer_type`, most populous first.
pub fn cases_by_population(table: &Table, cancer_type: &str) -> Result<Vec<PopulationPoint>> {
    let rows = filter_equals(table, CANCER_TYPE, cancer_type)?;
    let rows = coerce_numeric(&rows, POPULATION)?;
    let rows = coerce_numeric(&rows, CASE_COUNT)?;
    let rows = sort_table_descending(&rows, POPULATION)?;

    let points = rows
        .strings(AREA)?
        .into_iter()
        .zip(rows.numbers(POPULATION)?)
        .zip(rows.numbers(CASE_COUNT)?)
        .map(|((area, population), cases)| PopulationPoint {
            area,
            population,
            cases,
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_sorted_by_population() -> Result<()> {
        let table = Table::from_string_columns(&[
            (AREA, vec!["Idaho", "Nevada", "Georgia", "Colorado", "Nevada"]),
            (CANCER_TYPE, vec!["Esophagus", "Esophagus", "Esophagus", "Esophagus", "Lung"]),
            (CASE_COUNT, vec!["90", "150", "n/a", "300", "1900"]),
            (POPULATION, vec!["1716943", "2998039", "10429379", "?", "2998039"]),
        ])?;

        let points = cases_by_population(&table, "Esophagus")?;
        let areas: Vec<&str> = points.iter().map(|p| p.area.as_str()).collect();
        assert_eq!(areas, vec!["Georgia", "Nevada", "Idaho", "Colorado"]);
        assert_eq!(points[0].cases, None);
        assert_eq!(points[1].population, Some(2998039));
        assert_eq!(points[3].population, None);
        assert_eq!(points[3].cases, Some(300));

        assert!(cases_by_population(&table, "Testis")?.is_empty());
        Ok(())
    }
}
