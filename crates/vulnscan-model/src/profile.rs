//! Report dialect settings.
//!
//! Profiles are TOML files. Every key is optional and falls back to the
//! scanner's stock export layout:
//!
//! ```toml
//! preamble_lines = 8
//! input_delimiter = ";"
//! output_delimiter = ","
//! pci_column = "PCI Vuln"
//! pci_value = "yes"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::columns::column;
use crate::error::{ProfileError, Result};

/// Environment variable naming a profile file when `--profile` is absent.
pub const PROFILE_ENV_VAR: &str = "VULNSCAN_PROFILE";

/// Lines of disclaimer text the scanner writes before the table header.
pub const DEFAULT_PREAMBLE_LINES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportProfile {
    /// Lines discarded before the header row.
    pub preamble_lines: usize,
    /// Field delimiter of the scanner export.
    pub input_delimiter: char,
    /// Field delimiter of every emitted file.
    pub output_delimiter: char,
    /// Column tested by the PCI split.
    pub pci_column: String,
    /// Value (case-insensitive) routing a row to the PCI output.
    pub pci_value: String,
}

impl Default for ReportProfile {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
            input_delimiter: ';',
            output_delimiter: ',',
            pci_column: column::PCI_VULN.to_string(),
            pci_value: "yes".to_string(),
        }
    }
}

impl ReportProfile {
    /// Parse and validate a profile from TOML text.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        let profile: Self = toml::from_str(text).map_err(|source| ProfileError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Resolve the active profile: explicit path, then `VULNSCAN_PROFILE`,
    /// then built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(PROFILE_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::load(&PathBuf::from(value)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        delimiter_byte("input_delimiter", self.input_delimiter)?;
        delimiter_byte("output_delimiter", self.output_delimiter)?;
        if self.pci_column.trim().is_empty() {
            return Err(ProfileError::Invalid {
                message: "pci_column must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn input_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte("input_delimiter", self.input_delimiter)
    }

    pub fn output_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte("output_delimiter", self.output_delimiter)
    }
}

fn delimiter_byte(field: &'static str, value: char) -> Result<u8> {
    if value.is_ascii() && !matches!(value, '"' | '\n' | '\r') {
        Ok(value as u8)
    } else {
        Err(ProfileError::InvalidDelimiter {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_export() {
        let profile = ReportProfile::default();
        assert_eq!(profile.preamble_lines, 8);
        assert_eq!(profile.input_delimiter_byte().unwrap(), b';');
        assert_eq!(profile.output_delimiter_byte().unwrap(), b',');
        assert_eq!(profile.pci_column, "PCI Vuln");
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let profile =
            ReportProfile::from_toml_str("output_delimiter = \";\"\n", Path::new("p.toml"))
                .unwrap();
        assert_eq!(profile.output_delimiter, ';');
        assert_eq!(profile.preamble_lines, 8);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = ReportProfile::from_toml_str("preamble = 3\n", Path::new("p.toml"));
        assert!(matches!(result, Err(ProfileError::Toml { .. })));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let result = ReportProfile::from_toml_str("input_delimiter = \"§\"\n", Path::new("p.toml"));
        assert!(matches!(
            result,
            Err(ProfileError::InvalidDelimiter {
                field: "input_delimiter",
                ..
            })
        ));
    }

    #[test]
    fn empty_pci_column_is_rejected() {
        let result = ReportProfile::from_toml_str("pci_column = \" \"\n", Path::new("p.toml"));
        assert!(matches!(result, Err(ProfileError::Invalid { .. })));
    }
}
