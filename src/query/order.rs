use crate::error::Result;
use crate::table::Table;
use arrow::{array::UInt32Array, compute::take_record_batch};
use tracing::debug;

/// Stable descending sort of `rows` by `key`.
///
/// Equal keys keep their incoming order. With `Option` keys, `None` sorts
/// after every `Some`.
pub fn sort_descending<T, K, F>(mut rows: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

/// Keep the first `n` rows.
pub fn top_n<T>(mut rows: Vec<T>, n: usize) -> Vec<T> {
    rows.truncate(n);
    rows
}

/// Stable descending sort of a table's rows by a coerced numeric `field`.
/// Missing values go last. Sorting a text column is an error, not a
/// lexicographic sort.
pub fn sort_table_descending(table: &Table, field: &str) -> Result<Table> {
    let keys: Vec<Option<i64>> = table.numbers(field)?;
    let order: Vec<u32> = sort_descending((0..keys.len() as u32).collect(), |&i| {
        keys[i as usize]
    });

    let batch = take_record_batch(table.batch(), &UInt32Array::from(order))?;
    debug!(field, rows = batch.num_rows(), "sort_table_descending");
    Ok(Table::new(batch))
}

/// First `n` rows of `table`, or all of them if there are fewer.
pub fn top_n_rows(table: &Table, n: usize) -> Table {
    let len = n.min(table.num_rows());
    Table::new(table.batch().slice(0, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::query::{coerce_numeric, group::GroupTotal};
    use crate::table::{CANCER_TYPE, CASE_COUNT};
    use anyhow::Result;

    fn totals() -> Vec<GroupTotal> {
        vec![
            GroupTotal::new("Lung", 10),
            GroupTotal::new("Skin", 30),
            GroupTotal::new("Ovary", 10),
            GroupTotal::new("Liver", 20),
            GroupTotal::new("Larynx", 30),
        ]
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let sorted = sort_descending(totals(), |g| g.total);
        let keys: Vec<&str> = sorted.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Skin", "Larynx", "Liver", "Lung", "Ovary"]);
        assert!(sorted.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_missing_sorts_last() {
        let sorted = sort_descending(vec![None, Some(3), Some(-1), None, Some(8)], |v| *v);
        assert_eq!(sorted, vec![Some(8), Some(3), Some(-1), None, None]);
    }

    #[test]
    fn test_top_n_lengths() {
        let sorted = sort_descending(totals(), |g| g.total);
        for n in [0, 1, 5, 20] {
            assert_eq!(top_n(sorted.clone(), n).len(), n.min(sorted.len()));
        }
        assert_eq!(top_n(sorted.clone(), 20), sorted);
        assert!(top_n(Vec::<GroupTotal>::new(), 20).is_empty());
    }

    #[test]
    fn test_sort_table_rows() -> Result<()> {
        let table = Table::from_string_columns(&[
            (CANCER_TYPE, vec!["Lung", "Skin", "Ovary", "Liver", "Testis"]),
            (CASE_COUNT, vec!["10", "n/a", "40", "10", "25"]),
        ])?;
        let table = coerce_numeric(&table, CASE_COUNT)?;

        let sorted = sort_table_descending(&table, CASE_COUNT)?;
        assert_eq!(sorted.num_rows(), 5);
        assert_eq!(
            sorted.strings(CANCER_TYPE)?,
            vec!["Ovary", "Testis", "Lung", "Liver", "Skin"]
        );
        assert_eq!(
            sorted.numbers(CASE_COUNT)?,
            vec![Some(40), Some(25), Some(10), Some(10), None]
        );

        let top = top_n_rows(&sorted, 2);
        assert_eq!(top.strings(CANCER_TYPE)?, vec!["Ovary", "Testis"]);
        assert_eq!(top_n_rows(&sorted, 20).num_rows(), 5);
        assert!(top_n_rows(&sorted, 0).is_empty());
        Ok(())
    }

    #[test]
    fn test_sort_text_column_fails() -> Result<()> {
        let table = Table::from_string_columns(&[(CASE_COUNT, vec!["9", "10"])])?;
        let err = sort_table_descending(&table, CASE_COUNT).unwrap_err();
        assert!(matches!(err, QueryError::ColumnType { .. }));
        Ok(())
    }
}
