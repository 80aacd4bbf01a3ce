//! Column projection.

use vulnscan_model::{ColumnSet, ProjectedRecord, RawRecord};

/// Restrict `record` to `columns`, trimming values and defaulting absent
/// columns to empty.
pub fn project(record: &RawRecord, columns: ColumnSet) -> ProjectedRecord {
    ProjectedRecord::from_fn(columns, |column| record.trimmed(column).to_string())
}

/// Projection bound to one column set.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    columns: ColumnSet,
}

impl Projector {
    pub fn new(columns: ColumnSet) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    pub fn project(&self, record: &RawRecord) -> ProjectedRecord {
        project(record, self.columns)
    }
}
