//! Delimited record sinks.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::debug;
use vulnscan_model::{ColumnSet, ProjectedRecord, ReportProfile};

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// What a finished sink wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSummary {
    pub path: PathBuf,
    pub columns: ColumnSet,
    pub rows: usize,
}

/// One output destination bound to a fixed column set.
pub struct RecordSink<W: Write> {
    writer: csv::Writer<W>,
    columns: ColumnSet,
    path: PathBuf,
    rows: usize,
}

impl RecordSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path, columns: ColumnSet, profile: &ReportProfile) -> Result<Self> {
        let delimiter = profile.output_delimiter_byte()?;
        ensure_parent_dir(path)?;
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(BufWriter::new(file), columns, delimiter, path)
    }
}

impl<W: Write> RecordSink<W> {
    /// Wrap an arbitrary writer; `label` names it in errors.
    ///
    /// Rows end with CRLF, the line ending spreadsheet tools and the existing
    /// report consumers expect.
    pub fn from_writer(
        inner: W,
        columns: ColumnSet,
        delimiter: u8,
        label: impl Into<PathBuf>,
    ) -> Result<Self> {
        let path = label.into();
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        writer
            .write_record(columns.columns)
            .map_err(|source| OutputError::Write {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), columns = %columns, "opened output");
        Ok(Self {
            writer,
            columns,
            path,
            rows: 0,
        })
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn write(&mut self, record: &ProjectedRecord) -> Result<()> {
        if record.columns() != self.columns {
            return Err(OutputError::ColumnMismatch {
                path: self.path.clone(),
                expected: self.columns.name,
                found: record.columns().name,
            });
        }
        self.writer
            .write_record(record.values())
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ProjectedRecord>,
    {
        for record in records {
            self.write(&record)?;
        }
        Ok(())
    }

    /// Flush buffered rows and report what was written.
    pub fn finish(mut self) -> Result<SinkSummary> {
        self.writer.flush().map_err(|source| OutputError::Flush {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), rows = self.rows, "closed output");
        Ok(SinkSummary {
            path: self.path,
            columns: self.columns,
            rows: self.rows,
        })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.writer.into_inner().map_err(|err| OutputError::Flush {
            path,
            source: err.into_error(),
        })
    }
}
