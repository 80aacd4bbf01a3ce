//! Scanner export ingestion.
//!
//! Scanner exports open with a fixed block of disclaimer lines, then a
//! delimited table. This crate discards the preamble, normalizes the header
//! row, and yields each data row as a [`RawRecord`](vulnscan_model::RawRecord).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vulnscan_ingest::open_scan_report;
//! use vulnscan_model::ReportProfile;
//!
//! let profile = ReportProfile::default();
//! let mut report = open_scan_report(Path::new("scan.csv"), &profile)?;
//! for record in report.records() {
//!     let record = record?;
//!     println!("{:?}", record.get("IP"));
//! }
//! ```

mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use table::{ScanHeaders, ScanReader, normalize_header, open_scan_report, skip_preamble};
