use crate::error::{QueryError, Result};
use crate::table::{utils::parse_count, Table};
use arrow::{
    array::{Array, BooleanArray},
    compute::filter_record_batch,
    datatypes::DataType,
};
use tracing::debug;

/// Keep the rows whose `field` equals `value`, in their original order.
///
/// String cells are compared case-sensitively after trimming. On a coerced
/// integer column `value` is parsed first; an unparsable value matches
/// nothing. No match yields an empty table.
pub fn filter_equals(table: &Table, field: &str, value: &str) -> Result<Table> {
    let col = table.column(field)?;
    let mask: BooleanArray = match col.data_type() {
        DataType::Utf8 => {
            let sarr = table.utf8_column(field)?;
            sarr.iter()
                .map(|v| Some(v.is_some_and(|s| s.trim() == value)))
                .collect()
        }
        DataType::Int64 => {
            let iarr = table.int64_column(field)?;
            let wanted = parse_count(value);
            iarr.iter()
                .map(|v| Some(wanted.is_some() && v == wanted))
                .collect()
        }
        other => {
            return Err(QueryError::ColumnType {
                column: field.to_string(),
                expected: "Utf8 or Int64",
                actual: other.clone(),
            })
        }
    };

    let batch = filter_record_batch(table.batch(), &mask)?;
    debug!(field, value, rows = batch.num_rows(), "filter_equals");
    Ok(Table::new(batch))
}
