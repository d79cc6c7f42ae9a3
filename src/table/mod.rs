// src/table/mod.rs

pub mod load;
pub mod trimming;
pub mod utils;

use crate::error::{QueryError, Result};
use arrow::{
    array::{Array, ArrayRef, Int64Array, StringArray},
    datatypes::{DataType, Field, Schema, SchemaRef},
    record_batch::RecordBatch,
};
use std::sync::Arc;

pub use load::{load_csv, read_csv};

/// Column names every source file must carry.
pub const AREA: &str = "Area";
pub const CODE: &str = "Code";
pub const CANCER_TYPE: &str = "CancerType";
pub const CASE_COUNT: &str = "CaseCount";
pub const DEATH_COUNT: &str = "DeathCount";
pub const POPULATION: &str = "Population";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    AREA,
    CODE,
    CANCER_TYPE,
    CASE_COUNT,
    DEATH_COUNT,
    POPULATION,
];

/// An immutable, ordered set of rows sharing one schema.
///
/// Cloning is cheap: the underlying Arrow arrays are reference counted, so
/// any number of queries can hold the same base table. Every query stage
/// builds a new `Table` and leaves its input untouched.
#[derive(Debug, Clone)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Build a table of `Utf8` columns from `(name, values)` pairs.
    /// All columns must have the same length.
    pub fn from_string_columns(columns: &[(&str, Vec<&str>)]) -> Result<Self> {
        let fields: Vec<Field> = columns
            .iter()
            .map(|(name, _)| Field::new(*name, DataType::Utf8, true))
            .collect();
        let arrays: Vec<ArrayRef> = columns
            .iter()
            .map(|(_, values)| Arc::new(StringArray::from(values.clone())) as ArrayRef)
            .collect();
        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        Ok(Self { batch })
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Position of `name` in the schema, or `MissingColumn`.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.batch
            .schema()
            .index_of(name)
            .map_err(|_| QueryError::MissingColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<&ArrayRef> {
        let idx = self.column_index(name)?;
        Ok(self.batch.column(idx))
    }

    /// The named column as strings. Fails on a coerced column.
    pub fn utf8_column(&self, name: &str) -> Result<&StringArray> {
        let col = self.column(name)?;
        col.as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| QueryError::ColumnType {
                column: name.to_string(),
                expected: "Utf8",
                actual: col.data_type().clone(),
            })
    }

    /// The named column as nullable integers; null means missing.
    /// Fails unless the column went through `coerce_numeric`.
    pub fn int64_column(&self, name: &str) -> Result<&Int64Array> {
        let col = self.column(name)?;
        col.as_any()
            .downcast_ref::<Int64Array>()
            .ok_or_else(|| QueryError::ColumnType {
                column: name.to_string(),
                expected: "Int64",
                actual: col.data_type().clone(),
            })
    }

    /// Cell text with nulls read as the empty string.
    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        let col = self.utf8_column(name)?;
        Ok(col
            .iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect())
    }

    /// Coerced values in row order.
    pub fn numbers(&self, name: &str) -> Result<Vec<Option<i64>>> {
        Ok(self.int64_column(name)?.iter().collect())
    }
}
