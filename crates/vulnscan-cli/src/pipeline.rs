//! Normalization pipelines behind each processing command.
//!
//! Each pipeline is one linear pass: open the export, read rows, project /
//! group / partition, and write. Outputs are only created once the export has
//! been opened successfully; a failure part-way through leaves whatever was
//! already written in place.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use vulnscan_ingest::{ScanHeaders, open_scan_report};
use vulnscan_model::{
    ColumnSet, FULL_PROJECTION, GROUPED_SUMMARY, HOST_SUMMARY, ReportProfile, column,
};
use vulnscan_output::RecordSink;
use vulnscan_transform::{FieldEquals, Grouper, Partition, PlaceholderMode, Projector};

use crate::logging::redact_value;
use crate::types::RunOutcome;

/// Project every row onto the full column set.
pub fn clean(input: &Path, output: &Path, profile: &ReportProfile) -> Result<RunOutcome> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut report = open_scan_report(input, profile).context("open scan export")?;
    warn_missing_columns(report.headers(), FULL_PROJECTION);
    let projector = Projector::new(FULL_PROJECTION);
    let mut sink = RecordSink::create(output, FULL_PROJECTION, profile)
        .context("create clean output")?;

    let mut outcome = RunOutcome::new("clean", input);
    for record in report.records() {
        let record = record.context("read scan export")?;
        outcome.rows_read += 1;
        sink.write(&projector.project(&record))
            .context("write clean output")?;
    }
    outcome
        .outputs
        .push(sink.finish().context("finish clean output")?);

    info!(
        rows = outcome.rows_read,
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(outcome)
}

/// Unique (QID, Severity) pairs per IP.
pub fn summarize(input: &Path, output: &Path, profile: &ReportProfile) -> Result<RunOutcome> {
    let span = info_span!("summary", input = %input.display());
    let _guard = span.enter();
    grouped(
        "summary",
        input,
        output,
        profile,
        GROUPED_SUMMARY,
        PlaceholderMode::Blank,
    )
}

/// Grouped summary with DNS and CVE ID columns.
///
/// With [`PlaceholderMode::Blank`] both columns are written empty, matching
/// the established layout of this report; a warning says so on every run.
pub fn host_summary(
    input: &Path,
    output: &Path,
    profile: &ReportProfile,
    placeholders: PlaceholderMode,
) -> Result<RunOutcome> {
    let span = info_span!("host_summary", input = %input.display());
    let _guard = span.enter();
    if placeholders == PlaceholderMode::Blank {
        warn!(
            columns = "DNS, CVE ID",
            "host summary writes DNS and CVE ID empty; pass --fill-placeholders to populate them"
        );
    }
    grouped(
        "host-summary",
        input,
        output,
        profile,
        HOST_SUMMARY,
        placeholders,
    )
}

fn grouped(
    command: &'static str,
    input: &Path,
    output: &Path,
    profile: &ReportProfile,
    columns: ColumnSet,
    placeholders: PlaceholderMode,
) -> Result<RunOutcome> {
    let start = Instant::now();
    let mut report = open_scan_report(input, profile).context("open scan export")?;
    warn_missing_columns(report.headers(), columns);

    let mut grouper = Grouper::new();
    for record in report.records() {
        let record = record.context("read scan export")?;
        grouper.observe(&record);
    }
    let index = grouper.finish();
    info!(
        rows = index.observed(),
        hosts = index.groups().len(),
        unique = index.entry_count(),
        skipped = index.skipped(),
        duplicates = index.duplicates(),
        "grouping complete"
    );

    let mut sink =
        RecordSink::create(output, columns, profile).with_context(|| format!("create {command} output"))?;
    sink.write_all(index.rows(columns, placeholders))
        .with_context(|| format!("write {command} output"))?;

    let mut outcome = RunOutcome::new(command, input);
    outcome.rows_read = index.observed();
    outcome.rows_skipped = index.skipped();
    outcome.duplicates = index.duplicates();
    outcome
        .outputs
        .push(sink.finish().with_context(|| format!("finish {command} output"))?);

    info!(
        rows = outcome.rows_written(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "{command} complete"
    );
    Ok(outcome)
}

/// Route projected rows into PCI and non-PCI outputs.
pub fn split_pci(
    input: &Path,
    pci_output: &Path,
    non_pci_output: &Path,
    profile: &ReportProfile,
) -> Result<RunOutcome> {
    let span = info_span!("split_pci", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let predicate = FieldEquals::pci(profile);
    if !FULL_PROJECTION.contains(predicate.column()) {
        warn!(
            column = predicate.column(),
            "PCI column is not part of the projection; every row will be written as non-PCI"
        );
    }

    let mut report = open_scan_report(input, profile).context("open scan export")?;
    warn_missing_columns(report.headers(), FULL_PROJECTION);
    let projector = Projector::new(FULL_PROJECTION);
    let mut pci = RecordSink::create(pci_output, FULL_PROJECTION, profile)
        .context("create PCI output")?;
    let mut non_pci = RecordSink::create(non_pci_output, FULL_PROJECTION, profile)
        .context("create non-PCI output")?;

    let mut outcome = RunOutcome::new("split-pci", input);
    for record in report.records() {
        let record = record.context("read scan export")?;
        outcome.rows_read += 1;
        let projected = projector.project(&record);
        let route = predicate.route(&projected);
        trace!(
            ip = redact_value(projected.get(column::IP).unwrap_or_default()),
            ?route,
            "routed row"
        );
        match route {
            Partition::Matched => pci.write(&projected).context("write PCI output")?,
            Partition::Other => non_pci
                .write(&projected)
                .context("write non-PCI output")?,
        }
    }
    outcome
        .outputs
        .push(pci.finish().context("finish PCI output")?);
    outcome
        .outputs
        .push(non_pci.finish().context("finish non-PCI output")?);

    info!(
        rows = outcome.rows_read,
        pci = outcome.outputs[0].rows,
        non_pci = outcome.outputs[1].rows,
        duration_ms = start.elapsed().as_millis(),
        "PCI split complete"
    );
    Ok(outcome)
}

fn warn_missing_columns(headers: &ScanHeaders, columns: ColumnSet) {
    if headers.is_empty() {
        return;
    }
    let missing = headers.missing(columns.columns);
    if !missing.is_empty() {
        warn!(
            columns = %missing.join(", "),
            "scan export lacks columns; they will be written empty"
        );
    }
}
