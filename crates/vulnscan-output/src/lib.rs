//! Output generation for normalized scanner data.
//!
//! Every destination is a [`RecordSink`]: it writes its header once on
//! creation, then one row per record in the order records arrive.

mod error;
mod sink;

pub use error::{OutputError, Result};
pub use sink::{RecordSink, SinkSummary, ensure_parent_dir};
