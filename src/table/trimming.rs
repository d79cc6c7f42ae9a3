use crate::table::utils::clean_str;
use anyhow::Result;
use arrow::{
    array::{Array, ArrayRef, StringArray},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Trim every `Utf8` column in the batch; other columns pass through.
pub fn trim_string_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut cols = Vec::with_capacity(batch.num_columns());
    for arr in batch.columns() {
        if let Some(sarr) = arr.as_any().downcast_ref::<StringArray>() {
            let trimmed: StringArray = sarr.iter().map(|opt| opt.map(clean_str)).collect();
            cols.push(Arc::new(trimmed) as ArrayRef);
            continue;
        }
        cols.push(arr.clone());
    }

    RecordBatch::try_new(batch.schema(), cols).map_err(Into::into)
}
