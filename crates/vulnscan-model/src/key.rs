use std::fmt;

/// Secondary identifier deduplicated under a grouping key.
///
/// Ordering is derived so the key can live in a `BTreeSet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DedupKey {
    pub qid: String,
    pub severity: String,
}

impl DedupKey {
    pub fn new(qid: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            qid: qid.into(),
            severity: severity.into(),
        }
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.qid, self.severity)
    }
}
