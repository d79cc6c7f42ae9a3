// src/table/load.rs

use crate::error::QueryError;
use crate::table::{trimming::trim_string_columns, Table, REQUIRED_COLUMNS};
use anyhow::{Context, Result};
use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::{fs, io::Cursor, path::Path, sync::Arc};
use tracing::{debug, info};

const BATCH_SIZE: usize = 8192;

/// Read the statistics file at `path` into a `Table`.
///
/// Every column is loaded as `Utf8` and trimmed; numeric fields stay text
/// until a query coerces them. Fails if any of the required columns is
/// missing from the header.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let data = fs::read(&path)
        .with_context(|| format!("Failed to read CSV file: {:?}", path.as_ref()))?;
    let table = read_csv(&data)?;
    info!(rows = table.num_rows(), "loaded table");
    Ok(table)
}

/// Parse CSV bytes (header row first) into a `Table`.
pub fn read_csv(data: &[u8]) -> Result<Table> {
    // 1) Header only: we want names, not inferred types
    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(data), Some(0))
        .context("reading CSV header")?;
    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|f| Field::new(f.name().trim(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    for name in REQUIRED_COLUMNS {
        if schema.index_of(name).is_err() {
            return Err(QueryError::MissingColumn(name.to_string()).into());
        }
    }
    debug!(columns = schema.fields().len(), "header ok");

    // 2) Rows, all as strings; short rows are padded with nulls
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_truncated_rows(true)
        .build(Cursor::new(data))
        .context("creating CSV reader")?;
    let batches = reader
        .collect::<Result<Vec<RecordBatch>, _>>()
        .context("parsing CSV rows")?;
    let batch = concat_batches(&schema, &batches).context("concatenating CSV batches")?;

    // 3) Strip stray whitespace once so filters compare clean values
    let batch = trim_string_columns(&batch)?;
    Ok(Table::new(batch))
}
