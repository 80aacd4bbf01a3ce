//! Scanner export reading with a fixed-size preamble.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};
use vulnscan_model::{RawRecord, ReportProfile};

use crate::error::{IngestError, Result};

use super::header::ScanHeaders;
use super::preamble::skip_preamble;

/// Reader over the tabular part of a scanner export.
///
/// The preamble has already been consumed and the header row parsed by the
/// time a `ScanReader` exists. Rows of any width are accepted.
pub struct ScanReader<R> {
    reader: csv::Reader<R>,
    headers: ScanHeaders,
    source: PathBuf,
    preamble_skipped: usize,
}

/// Open a scanner export on disk.
pub fn open_scan_report(path: &Path, profile: &ReportProfile) -> Result<ScanReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    ScanReader::from_reader(BufReader::new(file), profile, path)
}

impl<R: BufRead> ScanReader<R> {
    /// Skip the preamble of `input` and parse its header row.
    ///
    /// `source` is only used to label errors and log events.
    pub fn from_reader(
        mut input: R,
        profile: &ReportProfile,
        source: impl Into<PathBuf>,
    ) -> Result<Self> {
        let source = source.into();
        let delimiter = profile.input_delimiter_byte()?;
        let preamble_skipped = skip_preamble(&mut input, profile.preamble_lines)
            .map_err(|e| IngestError::read(&source, e))?;
        if preamble_skipped < profile.preamble_lines {
            debug!(
                path = %source.display(),
                expected = profile.preamble_lines,
                skipped = preamble_skipped,
                "input ended inside preamble"
            );
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let headers = ScanHeaders::from_record(
            reader
                .headers()
                .map_err(|e| IngestError::csv(&source, e))?
                .iter(),
        );
        if headers.is_empty() {
            warn!(path = %source.display(), "scan export has no header row");
        } else {
            debug!(
                path = %source.display(),
                columns = headers.len(),
                "parsed scan export header"
            );
        }

        Ok(Self {
            reader,
            headers,
            source,
            preamble_skipped,
        })
    }

    pub fn headers(&self) -> &ScanHeaders {
        &self.headers
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of preamble lines actually discarded.
    pub fn preamble_skipped(&self) -> usize {
        self.preamble_skipped
    }

    /// Lazily yield each data row as a [`RawRecord`].
    pub fn records(&mut self) -> impl Iterator<Item = Result<RawRecord>> + '_ {
        let headers = &self.headers;
        let source = &self.source;
        self.reader.records().map(move |record| {
            record
                .map(|record| to_raw_record(headers, &record))
                .map_err(|e| IngestError::csv(source, e))
        })
    }
}

fn to_raw_record(headers: &ScanHeaders, record: &StringRecord) -> RawRecord {
    RawRecord::from_fields(headers.iter(), record.iter())
}
