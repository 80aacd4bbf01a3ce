use std::path::PathBuf;

use vulnscan_output::SinkSummary;

/// Counters and outputs of one normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub command: &'static str,
    pub input: PathBuf,
    /// Data rows read after the preamble and header.
    pub rows_read: usize,
    /// Rows dropped for lacking a grouping key.
    pub rows_skipped: usize,
    /// Rows collapsed into an already-seen pair.
    pub duplicates: usize,
    pub outputs: Vec<SinkSummary>,
}

impl RunOutcome {
    pub fn new(command: &'static str, input: impl Into<PathBuf>) -> Self {
        Self {
            command,
            input: input.into(),
            rows_read: 0,
            rows_skipped: 0,
            duplicates: 0,
            outputs: Vec::new(),
        }
    }

    pub fn rows_written(&self) -> usize {
        self.outputs.iter().map(|output| output.rows).sum()
    }
}
