//! Function inventory parsing.
//!
//! The inventory is a CSV file with a header row. The first column names the
//! function; the second holds its environment variables as a JSON object of
//! strings, or nothing when the function has none.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{RemediationError, Result};

/// One function listed in the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub variables: BTreeMap<String, String>,
}

/// Read an inventory file from disk.
pub fn read_inventory(path: &Path) -> Result<Vec<FunctionEntry>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            RemediationError::InventoryNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RemediationError::InventoryRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_inventory(file, path)
}

/// Parse inventory rows from any reader; `source` labels errors.
pub fn parse_inventory<R: Read>(input: R, source: &Path) -> Result<Vec<FunctionEntry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| RemediationError::InventoryParse {
            path: source.to_path_buf(),
            source: e,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let name = record.get(0).unwrap_or_default().trim();
        if name.is_empty() {
            warn!(line, "skipping inventory row without a function name");
            continue;
        }
        let variables = parse_variables(record.get(1).unwrap_or_default()).map_err(|e| {
            RemediationError::InvalidVariables {
                function: name.to_string(),
                line,
                source: e,
            }
        })?;
        entries.push(FunctionEntry {
            name: name.to_string(),
            variables,
        });
    }
    debug!(path = %source.display(), functions = entries.len(), "read inventory");
    Ok(entries)
}

fn parse_variables(cell: &str) -> serde_json::Result<BTreeMap<String, String>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(cell)
}
