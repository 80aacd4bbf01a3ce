//! CLI library components for vulnscan.

pub mod logging;
pub mod pipeline;
pub mod types;
