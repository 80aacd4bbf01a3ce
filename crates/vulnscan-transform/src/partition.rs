//! Single-field predicate routing.

use vulnscan_model::{ProjectedRecord, ReportProfile};

/// Which output a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Matched,
    /// Predicate failed, or the field is missing or holds an unexpected value.
    Other,
}

/// Case-insensitive equality test on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEquals {
    column: String,
    value: String,
}

impl FieldEquals {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into().trim().to_string(),
        }
    }

    /// The PCI predicate configured by `profile`.
    pub fn pci(profile: &ReportProfile) -> Self {
        Self::new(profile.pci_column.trim(), profile.pci_value.as_str())
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, record: &ProjectedRecord) -> bool {
        record
            .get(&self.column)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(&self.value))
    }

    pub fn route(&self, record: &ProjectedRecord) -> Partition {
        if self.matches(record) {
            Partition::Matched
        } else {
            Partition::Other
        }
    }
}

/// Records split by a predicate, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    pub matched: Vec<ProjectedRecord>,
    pub other: Vec<ProjectedRecord>,
}

/// Split `records` into matched and other, preserving relative order.
pub fn partition<I>(records: I, predicate: &FieldEquals) -> Partitioned
where
    I: IntoIterator<Item = ProjectedRecord>,
{
    let mut out = Partitioned::default();
    for record in records {
        match predicate.route(&record) {
            Partition::Matched => out.matched.push(record),
            Partition::Other => out.other.push(record),
        }
    }
    out
}
