//! Integration tests for the normalization pipelines.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vulnscan_cli::pipeline::{clean, host_summary, split_pci, summarize};
use vulnscan_model::ReportProfile;
use vulnscan_transform::PlaceholderMode;

const HEADER: &str = "IP;DNS;NetBIOS;OS;IP Status;QID;Title;Type;Severity;Port;Protocol;FQDN;SSL;\
CVE ID;Vendor Reference;Bugtraq ID;Threat;Impact;Solution;Exploitability;Associated Malware;\
Results;PCI Vuln;Instance;Category";

fn preamble() -> String {
    [
        "\"Scan Results\"",
        "\"Acme Corp\"",
        "\"Report generated\";\"2024-05-01\"",
        "",
        "\"Target\";\"10.0.0.0/24\"",
        "",
        "\"Disclaimer: unverified findings\"",
        "",
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// Build a scanner row from the columns the tests care about.
fn row(ip: &str, dns: &str, qid: &str, severity: &str, cve: &str, pci: &str) -> String {
    format!(
        "{ip};{dns};;linux;host up;{qid};Title {qid};Vuln;{severity};443;tcp;;;{cve};;;threat;impact;fix;;;;{pci};;Cat"
    )
}

fn write_export(dir: &TempDir, body: &[&str]) -> PathBuf {
    let mut contents = preamble();
    contents.push_str(HEADER);
    contents.push('\n');
    for line in body {
        contents.push_str(line);
        contents.push('\n');
    }
    let path = dir.path().join("scan.csv");
    fs::write(&path, contents).expect("write export");
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn clean_projects_row_after_preamble() {
    let dir = TempDir::new().expect("temp dir");
    let mut contents = "x\n".repeat(8);
    contents.push_str(
        "IP;DNS;OS;QID;Title;Severity;CVE ID;Vendor Reference;Threat;Impact;Solution;PCI Vuln;Category\n",
    );
    contents.push_str("10.0.0.1;host;os;Q1;T;5;;;;;;yes;Cat\n");
    let input = dir.path().join("scan.csv");
    fs::write(&input, contents).expect("write export");
    let output = dir.path().join("clean.csv");

    let outcome = clean(&input, &output, &ReportProfile::default()).expect("clean");

    assert_eq!(outcome.rows_read, 1);
    let bytes = fs::read(&output).expect("read output");
    assert!(bytes.ends_with(b"10.0.0.1,host,os,Q1,T,5,,,,,,yes,Cat\r\n"));
    let lines = read_lines(&output);
    assert_eq!(
        lines,
        vec![
            "IP,DNS,OS,QID,Title,Severity,CVE ID,Vendor Reference,Threat,Impact,Solution,PCI Vuln,Category",
            "10.0.0.1,host,os,Q1,T,5,,,,,,yes,Cat",
        ]
    );
}

#[test]
fn clean_column_order_is_independent_of_source_order() {
    let dir = TempDir::new().expect("temp dir");
    let mut contents = "x\n".repeat(8);
    contents.push_str("Category;Severity;IP;QID\n Cat ;5; 10.0.0.1 ;Q1\n");
    let input = dir.path().join("scan.csv");
    fs::write(&input, contents).expect("write export");
    let output = dir.path().join("clean.csv");

    clean(&input, &output, &ReportProfile::default()).expect("clean");

    let lines = read_lines(&output);
    assert_eq!(lines[1], "10.0.0.1,,,Q1,,5,,,,,,,Cat");
}

#[test]
fn summary_collapses_duplicates_and_drops_unkeyed_rows() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(
        &dir,
        &[
            &row("10.0.0.1", "web01", "Q1", "5", "CVE-1", "yes"),
            &row("10.0.0.1", "web01-alt", "Q1", "5", "", "no"),
            &row("10.0.0.1", "web01", "Q2", "3", "", "no"),
            &row("", "orphan", "Q1", "5", "", "no"),
            &row("10.0.0.2", "db01", "", "4", "", "no"),
            &row("10.0.0.2", "db01", "Q7", "4", "", "no"),
        ],
    );
    let output = dir.path().join("summary.csv");

    let outcome = summarize(&input, &output, &ReportProfile::default()).expect("summary");

    assert_eq!(outcome.rows_read, 6);
    assert_eq!(outcome.rows_skipped, 2);
    assert_eq!(outcome.duplicates, 1);
    assert_eq!(outcome.rows_written(), 3);
    insta::assert_snapshot!(fs::read_to_string(&output).unwrap().replace("\r\n", "\n"), @r"
    IP,QID,Severity
    10.0.0.1,Q1,5
    10.0.0.1,Q2,3
    10.0.0.2,Q7,4
    ");
}

#[test]
fn host_summary_blank_and_filled() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(
        &dir,
        &[
            &row("10.0.0.1", "", "Q1", "5", "", "no"),
            &row("10.0.0.1", "web01", "Q1", "5", "CVE-2024-1", "no"),
        ],
    );
    let blank = dir.path().join("blank.csv");
    let filled = dir.path().join("filled.csv");
    let profile = ReportProfile::default();

    host_summary(&input, &blank, &profile, PlaceholderMode::Blank).expect("blank");
    host_summary(&input, &filled, &profile, PlaceholderMode::Fill).expect("filled");

    assert_eq!(
        read_lines(&blank),
        vec!["IP,DNS,CVE ID,QID,Severity", "10.0.0.1,,,Q1,5"]
    );
    assert_eq!(
        read_lines(&filled),
        vec!["IP,DNS,CVE ID,QID,Severity", "10.0.0.1,web01,CVE-2024-1,Q1,5"]
    );
}

#[test]
fn split_pci_routes_every_row_exactly_once() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(
        &dir,
        &[
            &row("10.0.0.1", "a", "Q1", "5", "", "yes"),
            &row("10.0.0.2", "b", "Q2", "4", "", "no"),
            &row("10.0.0.3", "c", "Q3", "3", "", "YES"),
            &row("10.0.0.4", "d", "Q4", "2", "", ""),
            &row("", "e", "Q5", "1", "", "Yes"),
        ],
    );
    let pci = dir.path().join("out/pci.csv");
    let non_pci = dir.path().join("out/non_pci.csv");

    let outcome = split_pci(&input, &pci, &non_pci, &ReportProfile::default()).expect("split");

    assert_eq!(outcome.rows_read, 5);
    assert_eq!(outcome.outputs.len(), 2);
    let pci_lines = read_lines(&pci);
    let non_pci_lines = read_lines(&non_pci);
    assert_eq!(pci_lines[0], non_pci_lines[0]);
    assert_eq!(pci_lines.len() - 1, 3);
    assert_eq!(non_pci_lines.len() - 1, 2);
    assert!(pci_lines[1].starts_with("10.0.0.1,"));
    assert!(pci_lines[2].starts_with("10.0.0.3,"));
    assert!(pci_lines[3].starts_with(",e,"));
    assert!(non_pci_lines[1].starts_with("10.0.0.2,"));
    assert!(non_pci_lines[2].starts_with("10.0.0.4,"));
}

#[test]
fn split_pci_writes_headers_for_empty_export() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir, &[]);
    let pci = dir.path().join("pci.csv");
    let non_pci = dir.path().join("non_pci.csv");

    let outcome = split_pci(&input, &pci, &non_pci, &ReportProfile::default()).expect("split");

    assert_eq!(outcome.rows_written(), 0);
    assert_eq!(read_lines(&pci).len(), 1);
    assert_eq!(read_lines(&non_pci).len(), 1);
}

#[test]
fn missing_input_creates_no_output() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("summary.csv");

    let err = summarize(&input, &output, &ReportProfile::default()).unwrap_err();

    assert!(format!("{err:#}").contains("scan export not found"));
    assert!(!output.exists());
}

#[test]
fn profile_changes_preamble_and_dialect() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("scan.csv");
    fs::write(&input, "one line preamble\nIP,QID,Severity\n10.0.0.1,Q1,5\n").expect("write");
    let output = dir.path().join("summary.csv");
    let profile = ReportProfile {
        preamble_lines: 1,
        input_delimiter: ',',
        output_delimiter: ';',
        ..ReportProfile::default()
    };

    summarize(&input, &output, &profile).expect("summary");

    assert_eq!(read_lines(&output), vec!["IP;QID;Severity", "10.0.0.1;Q1;5"]);
}

#[test]
fn repeated_header_takes_last_value() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("scan.csv");
    let mut contents = "x\n".repeat(8);
    contents.push_str("IP;QID;Severity;IP\n10.0.0.1;Q1;5;10.0.0.9\n");
    fs::write(&input, contents).expect("write export");
    let output = dir.path().join("summary.csv");

    summarize(&input, &output, &ReportProfile::default()).expect("summary");

    assert_eq!(read_lines(&output), vec!["IP,QID,Severity", "10.0.0.9,Q1,5"]);
}
