//! CLI argument definitions for vulnscan.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vulnscan",
    version,
    about = "Clean, summarize and split vulnerability-scanner exports",
    long_about = "Normalize semicolon-delimited vulnerability-scanner exports.\n\n\
                  Skips the report preamble, keeps the reporting columns, collapses\n\
                  duplicate findings per host and splits PCI findings into their own file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include host addresses and other row values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Report profile (TOML). Falls back to $VULNSCAN_PROFILE, then defaults.
    #[arg(long = "profile", value_name = "PATH", global = true)]
    pub profile: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Keep only the reporting columns, one row per finding.
    Clean(ConvertArgs),

    /// Write unique IP / QID / Severity rows.
    Summary(ConvertArgs),

    /// Write unique findings per host with DNS and CVE ID columns.
    HostSummary(HostSummaryArgs),

    /// Split findings into PCI and non-PCI files.
    SplitPci(SplitPciArgs),

    /// Re-encrypt function environments with a new KMS key (dry run: logs intended updates).
    RotateKeys(RotateKeysArgs),

    /// List the built-in output column sets.
    Columns,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Scanner export to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct HostSummaryArgs {
    #[command(flatten)]
    pub paths: ConvertArgs,

    /// Populate DNS and CVE ID from the export instead of leaving them empty.
    ///
    /// DNS takes the first non-empty value seen for the IP; CVE ID takes the
    /// first non-empty value seen for the QID/Severity pair.
    #[arg(long = "fill-placeholders")]
    pub fill_placeholders: bool,
}

#[derive(Parser)]
pub struct SplitPciArgs {
    /// Scanner export to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File receiving rows flagged as PCI.
    #[arg(value_name = "PCI_OUTPUT")]
    pub pci_output: PathBuf,

    /// File receiving every other row.
    #[arg(value_name = "NON_PCI_OUTPUT")]
    pub non_pci_output: PathBuf,
}

#[derive(Parser)]
pub struct RotateKeysArgs {
    /// CSV listing function names and their environment variables.
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,

    /// ARN of the KMS key or alias to encrypt with.
    #[arg(long = "kms-key-arn", value_name = "ARN")]
    pub kms_key_arn: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_host_summary_flags() {
        let cli = Cli::try_parse_from([
            "vulnscan",
            "--profile",
            "p.toml",
            "host-summary",
            "in.csv",
            "out.csv",
            "--fill-placeholders",
        ])
        .unwrap();
        assert_eq!(cli.profile, Some(PathBuf::from("p.toml")));
        match cli.command {
            Command::HostSummary(args) => {
                assert!(args.fill_placeholders);
                assert_eq!(args.paths.output, PathBuf::from("out.csv"));
            }
            _ => panic!("expected host-summary"),
        }
    }

    #[test]
    fn rotate_keys_is_described_as_dry_run() {
        let command = Cli::command();
        let rotate = command
            .find_subcommand("rotate-keys")
            .expect("rotate-keys subcommand");
        let about = rotate.get_about().map(ToString::to_string).unwrap_or_default();
        assert!(about.contains("dry run"), "{about}");
    }

    #[test]
    fn split_pci_requires_both_outputs() {
        assert!(Cli::try_parse_from(["vulnscan", "split-pci", "in.csv", "pci.csv"]).is_err());
    }
}
