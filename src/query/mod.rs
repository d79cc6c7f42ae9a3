//! Query stages over an immutable [`Table`](crate::table::Table).
//!
//! Each stage is a free function that takes its input by reference (or by
//! value for plain sequences) and returns a fresh result, so callers can
//! chain them in whatever order a view needs:
//!
//! ```no_run
//! # use cancerstats::{query, table::{self, Table}};
//! # fn demo(base: &Table) -> Result<(), cancerstats::QueryError> {
//! let nevada = query::filter_equals(base, table::AREA, "Nevada")?;
//! let nevada = query::coerce_numeric(&nevada, table::CASE_COUNT)?;
//! let totals = query::group_sum(&nevada, table::CANCER_TYPE, table::CASE_COUNT)?;
//! let top = query::top_n(query::sort_descending(totals, |g| g.total), 20);
//! # let _ = top;
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod distinct;
pub mod filter;
pub mod group;
pub mod order;

pub use coerce::coerce_numeric;
pub use distinct::distinct_values;
pub use filter::filter_equals;
pub use group::{group_sum, GroupTotal};
pub use order::{sort_descending, sort_table_descending, top_n, top_n_rows};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Table, AREA, CANCER_TYPE, CASE_COUNT};
    use anyhow::Result;

    fn sample() -> Result<Table> {
        Ok(Table::from_string_columns(&[
            (AREA, vec!["Idaho", "Idaho", "Colorado", "Idaho", "Idaho", "Idaho", "Idaho"]),
            (
                CANCER_TYPE,
                vec!["Lung", "Skin", "Lung", "Ovary", "Liver", "Lung", "Testis"],
            ),
            (CASE_COUNT, vec!["10", "40", "99", "x", "25", "5", "30"]),
        ])?)
    }

    fn pipeline(table: &Table, area: &str, n: usize) -> Result<Vec<GroupTotal>> {
        let rows = filter_equals(table, AREA, area)?;
        let rows = coerce_numeric(&rows, CASE_COUNT)?;
        let totals = group_sum(&rows, CANCER_TYPE, CASE_COUNT)?;
        Ok(top_n(sort_descending(totals, |g| g.total), n))
    }

    #[test]
    fn test_full_pipeline() -> Result<()> {
        let out = pipeline(&sample()?, "Idaho", 3)?;
        assert_eq!(
            out,
            vec![
                GroupTotal::new("Skin", 40),
                GroupTotal::new("Testis", 30),
                GroupTotal::new("Liver", 25),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_pipeline_over_no_rows() -> Result<()> {
        assert!(pipeline(&sample()?, "Nevada", 20)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_top_twenty_of_five() -> Result<()> {
        let all = pipeline(&sample()?, "Idaho", usize::MAX)?;
        assert_eq!(all.len(), 5);
        assert_eq!(top_n(all.clone(), 20), all);
        Ok(())
    }
}
