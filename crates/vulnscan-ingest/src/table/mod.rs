//! Delimited table reading.

mod header;
mod preamble;
mod reader;

pub use header::{ScanHeaders, normalize_header};
pub use preamble::skip_preamble;
pub use reader::{ScanReader, open_scan_report};
