//! Column names and the fixed output column sets.

use std::fmt;

/// Column names as they appear in the scanner export header.
pub mod column {
    pub const IP: &str = "IP";
    pub const DNS: &str = "DNS";
    pub const OS: &str = "OS";
    pub const QID: &str = "QID";
    pub const TITLE: &str = "Title";
    pub const SEVERITY: &str = "Severity";
    pub const CVE_ID: &str = "CVE ID";
    pub const VENDOR_REFERENCE: &str = "Vendor Reference";
    pub const THREAT: &str = "Threat";
    pub const IMPACT: &str = "Impact";
    pub const SOLUTION: &str = "Solution";
    pub const PCI_VULN: &str = "PCI Vuln";
    pub const CATEGORY: &str = "Category";
}

/// A named, ordered list of output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [&'static str],
}

impl ColumnSet {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column within this set.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| *column == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All built-in column sets, in display order.
    pub fn builtin() -> [ColumnSet; 3] {
        [FULL_PROJECTION, GROUPED_SUMMARY, HOST_SUMMARY]
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every column kept by the clean and PCI-split outputs.
pub const FULL_PROJECTION: ColumnSet = ColumnSet {
    name: "full",
    description: "Projection of the reporting columns, one row per finding",
    columns: &[
        column::IP,
        column::DNS,
        column::OS,
        column::QID,
        column::TITLE,
        column::SEVERITY,
        column::CVE_ID,
        column::VENDOR_REFERENCE,
        column::THREAT,
        column::IMPACT,
        column::SOLUTION,
        column::PCI_VULN,
        column::CATEGORY,
    ],
};

/// One row per unique (QID, Severity) under each IP.
pub const GROUPED_SUMMARY: ColumnSet = ColumnSet {
    name: "summary",
    description: "Unique QID/Severity pairs grouped by IP",
    columns: &[column::IP, column::QID, column::SEVERITY],
};

/// Grouped summary carrying DNS and CVE ID placeholder columns.
pub const HOST_SUMMARY: ColumnSet = ColumnSet {
    name: "host-summary",
    description: "Grouped summary with DNS and CVE ID columns (blank unless filled)",
    columns: &[
        column::IP,
        column::DNS,
        column::CVE_ID,
        column::QID,
        column::SEVERITY,
    ],
};
