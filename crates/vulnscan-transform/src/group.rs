//! Per-host deduplication.
//!
//! A [`Grouper`] is a local accumulator: feed it raw rows, then call
//! [`Grouper::finish`] to obtain the [`GroupedIndex`] the writer consumes.
//! Hosts keep first-seen order and so do the pairs under each host, which
//! makes output deterministic for a given input.

use std::collections::BTreeMap;

use tracing::trace;
use vulnscan_model::{ColumnSet, DedupKey, ProjectedRecord, RawRecord, column};

/// Why a row did not contribute to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingIp,
    MissingQid,
}

/// Outcome of feeding one row to the grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First time this (QID, Severity) pair was seen for the host.
    Inserted,
    /// Pair already recorded for the host.
    Duplicate,
    Skipped(SkipReason),
}

/// How the DNS and CVE ID columns of the host summary are populated.
///
/// `Blank` reproduces the long-standing export layout in which both columns
/// are always empty even though the source carries them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderMode {
    #[default]
    Blank,
    /// DNS from the first non-empty value seen for the host, CVE ID from the
    /// first non-empty value seen for the (QID, Severity) pair.
    Fill,
}

/// One unique pair under a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub key: DedupKey,
    pub cve_id: String,
}

/// All unique pairs recorded for one IP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub ip: String,
    pub dns: String,
    entries: Vec<GroupEntry>,
    positions: BTreeMap<DedupKey, usize>,
}

impl Group {
    fn new(ip: String) -> Self {
        Self {
            ip,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: DedupKey, dns: &str, cve_id: &str) -> Observation {
        if self.dns.is_empty() && !dns.is_empty() {
            self.dns = dns.to_string();
        }
        if let Some(&idx) = self.positions.get(&key) {
            let entry = &mut self.entries[idx];
            if entry.cve_id.is_empty() && !cve_id.is_empty() {
                entry.cve_id = cve_id.to_string();
            }
            return Observation::Duplicate;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(GroupEntry {
            key,
            cve_id: cve_id.to_string(),
        });
        Observation::Inserted
    }
}

/// Accumulates unique (QID, Severity) pairs per IP.
#[derive(Debug, Default)]
pub struct Grouper {
    groups: Vec<Group>,
    index: BTreeMap<String, usize>,
    observed: usize,
    skipped: usize,
    duplicates: usize,
}

impl Grouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw row. Rows without IP or QID are dropped.
    pub fn observe(&mut self, record: &RawRecord) -> Observation {
        self.observed += 1;
        let ip = record.trimmed(column::IP);
        let qid = record.trimmed(column::QID);
        let reason = if ip.is_empty() {
            Some(SkipReason::MissingIp)
        } else if qid.is_empty() {
            Some(SkipReason::MissingQid)
        } else {
            None
        };
        if let Some(reason) = reason {
            self.skipped += 1;
            trace!(row = self.observed, ?reason, "skipping row without grouping key");
            return Observation::Skipped(reason);
        }

        let key = DedupKey::new(qid, record.trimmed(column::SEVERITY));
        let idx = match self.index.get(ip) {
            Some(&idx) => idx,
            None => {
                self.index.insert(ip.to_string(), self.groups.len());
                self.groups.push(Group::new(ip.to_string()));
                self.groups.len() - 1
            }
        };
        let observation = self.groups[idx].insert(
            key,
            record.trimmed(column::DNS),
            record.trimmed(column::CVE_ID),
        );
        if observation == Observation::Duplicate {
            self.duplicates += 1;
        }
        observation
    }

    pub fn finish(self) -> GroupedIndex {
        GroupedIndex {
            groups: self.groups,
            observed: self.observed,
            skipped: self.skipped,
            duplicates: self.duplicates,
        }
    }
}

impl<'a> Extend<&'a RawRecord> for Grouper {
    fn extend<I: IntoIterator<Item = &'a RawRecord>>(&mut self, records: I) {
        for record in records {
            self.observe(record);
        }
    }
}

impl<'a> FromIterator<&'a RawRecord> for Grouper {
    fn from_iter<I: IntoIterator<Item = &'a RawRecord>>(records: I) -> Self {
        let mut grouper = Self::new();
        grouper.extend(records);
        grouper
    }
}

/// Finished per-host index, ready to be flattened into output rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedIndex {
    groups: Vec<Group>,
    observed: usize,
    skipped: usize,
    duplicates: usize,
}

impl GroupedIndex {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, ip: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.ip == ip)
    }

    /// Rows fed to the grouper.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Rows dropped for lacking IP or QID.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Rows collapsed into an existing pair.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Number of unique pairs across all hosts.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Flatten into one projected row per unique pair.
    pub fn rows(
        &self,
        columns: ColumnSet,
        placeholders: PlaceholderMode,
    ) -> impl Iterator<Item = ProjectedRecord> + '_ {
        self.groups.iter().flat_map(move |group| {
            group.entries.iter().map(move |entry| {
                ProjectedRecord::from_fn(columns, |name| match name {
                    column::IP => group.ip.clone(),
                    column::QID => entry.key.qid.clone(),
                    column::SEVERITY => entry.key.severity.clone(),
                    column::DNS if placeholders == PlaceholderMode::Fill => group.dns.clone(),
                    column::CVE_ID if placeholders == PlaceholderMode::Fill => {
                        entry.cve_id.clone()
                    }
                    _ => String::new(),
                })
            })
        })
    }
}
