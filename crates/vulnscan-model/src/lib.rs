//! Data model for vulnerability-scanner exports.
//!
//! Records flow through the normalizer in two shapes: a [`RawRecord`] keyed by
//! whatever header the export carried, and a [`ProjectedRecord`] restricted to
//! one of the fixed [`ColumnSet`]s. [`ReportProfile`] holds the dialect
//! settings shared by every stage.

pub mod columns;
pub mod error;
pub mod key;
pub mod profile;
pub mod record;

pub use columns::{ColumnSet, FULL_PROJECTION, GROUPED_SUMMARY, HOST_SUMMARY, column};
pub use error::{ProfileError, Result};
pub use key::DedupKey;
pub use profile::{DEFAULT_PREAMBLE_LINES, PROFILE_ENV_VAR, ReportProfile};
pub use record::{ProjectedRecord, RawRecord};
