use crate::error::Result;
use crate::query::{
    coerce_numeric, filter_equals, group_sum, sort_descending, sort_table_descending, top_n_rows,
};
use crate::table::{Table, AREA, CANCER_TYPE, CASE_COUNT, DEATH_COUNT};
use crate::views::{cap, Measure, Point, Series};
use tracing::debug;

/// Per-cancer totals of `measure` within one state, largest first.
pub fn state_cancer_totals(
    table: &Table,
    state: &str,
    measure: Measure,
    n: Option<usize>,
) -> Result<Series> {
    let field = measure.as_str();
    let rows = filter_equals(table, AREA, state)?;
    let rows = coerce_numeric(&rows, field)?;
    let totals = group_sum(&rows, CANCER_TYPE, field)?;
    let totals = cap(sort_descending(totals, |g| g.total), n);

    debug!(state, %measure, points = totals.len(), "state_cancer_totals");
    Ok(Series::new(measure.label(), totals.into_iter().map(Point::from)))
}

/// A state's rows ranked by `measure` without grouping, labelled by
/// cancer type. Rows with a missing count rank last.
pub fn state_top_rows(
    table: &Table,
    state: &str,
    measure: Measure,
    n: Option<usize>,
) -> Result<Series> {
    let field = measure.as_str();
    let rows = filter_equals(table, AREA, state)?;
    let rows = coerce_numeric(&rows, field)?;
    let mut rows = sort_table_descending(&rows, field)?;
    if let Some(n) = n {
        rows = top_n_rows(&rows, n);
    }

    let points = rows
        .strings(CANCER_TYPE)?
        .into_iter()
        .zip(rows.numbers(field)?)
        .map(|(label, value)| Point { label, value });
    Ok(Series::new(measure.label(), points))
}

/// Nationwide cases and deaths per cancer type, in first-seen order.
pub fn cases_vs_deaths(table: &Table) -> Result<Vec<Series>> {
    let rows = coerce_numeric(table, CASE_COUNT)?;
    let rows = coerce_numeric(&rows, DEATH_COUNT)?;

    let mut out = Vec::with_capacity(2);
    for measure in [Measure::CaseCount, Measure::DeathCount] {
        let totals = group_sum(&rows, CANCER_TYPE, measure.as_str())?;
        out.push(Series::new(
            measure.label(),
            totals.into_iter().map(Point::from),
        ));
    }
    Ok(out)
}
