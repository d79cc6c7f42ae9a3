use crate::error::{QueryError, Result};
use crate::table::{utils::parse_count, Table};
use arrow::{
    array::{Array, ArrayRef, Int64Builder},
    datatypes::{DataType, Field, FieldRef, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::debug;

/// Return a copy of `table` with `field` converted to nullable `Int64`.
///
/// Cells that are not integers (after trimming) become null, the missing
/// marker. Row count never changes. An already-coerced column is returned
/// as is.
pub fn coerce_numeric(table: &Table, field: &str) -> Result<Table> {
    let idx = table.column_index(field)?;
    match table.batch().column(idx).data_type() {
        DataType::Int64 => return Ok(table.clone()),
        DataType::Utf8 => {}
        other => {
            return Err(QueryError::ColumnType {
                column: field.to_string(),
                expected: "Utf8",
                actual: other.clone(),
            })
        }
    }

    let sarr = table.utf8_column(field)?;
    let mut b = Int64Builder::with_capacity(sarr.len());
    let mut missing = 0usize;
    for opt in sarr.iter() {
        let v = opt.and_then(parse_count);
        if v.is_none() {
            missing += 1;
        }
        b.append_option(v);
    }

    let schema = table.schema();
    let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
    fields[idx] = Arc::new(Field::new(field, DataType::Int64, true));
    let mut columns: Vec<ArrayRef> = table.batch().columns().to_vec();
    columns[idx] = Arc::new(b.finish());

    let batch = RecordBatch::try_new(
        Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone())),
        columns,
    )?;
    debug!(field, rows = batch.num_rows(), missing, "coerce_numeric");
    Ok(Table::new(batch))
}
