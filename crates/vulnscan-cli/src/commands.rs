use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use vulnscan_model::{ColumnSet, ReportProfile};
use vulnscan_remediate::{
    DryRunClient, KmsKeyArn, RotationReport, read_inventory, rotate_function_keys,
};
use vulnscan_transform::PlaceholderMode;

use vulnscan_cli::pipeline;
use vulnscan_cli::types::RunOutcome;

use crate::cli::{ConvertArgs, HostSummaryArgs, RotateKeysArgs, SplitPciArgs};
use crate::summary::apply_table_style;

pub fn run_clean(args: &ConvertArgs, profile: &ReportProfile) -> Result<RunOutcome> {
    pipeline::clean(&args.input, &args.output, profile)
}

pub fn run_summary(args: &ConvertArgs, profile: &ReportProfile) -> Result<RunOutcome> {
    pipeline::summarize(&args.input, &args.output, profile)
}

pub fn run_host_summary(args: &HostSummaryArgs, profile: &ReportProfile) -> Result<RunOutcome> {
    let placeholders = if args.fill_placeholders {
        PlaceholderMode::Fill
    } else {
        PlaceholderMode::Blank
    };
    pipeline::host_summary(&args.paths.input, &args.paths.output, profile, placeholders)
}

pub fn run_split_pci(args: &SplitPciArgs, profile: &ReportProfile) -> Result<RunOutcome> {
    pipeline::split_pci(&args.input, &args.pci_output, &args.non_pci_output, profile)
}

pub fn run_rotate_keys(args: &RotateKeysArgs) -> Result<RotationReport> {
    let kms_key_arn = KmsKeyArn::new(args.kms_key_arn.as_str()).context("parse --kms-key-arn")?;
    let inventory = read_inventory(&args.inventory).context("read function inventory")?;
    info!(
        functions = inventory.len(),
        inventory = %args.inventory.display(),
        "rotating environment encryption keys"
    );
    let mut client = DryRunClient::new();
    let report = rotate_function_keys(&mut client, &inventory, &kms_key_arn)?;
    Ok(report)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Set", "Columns", "Description"]);
    apply_table_style(&mut table);
    for set in ColumnSet::builtin() {
        table.add_row(vec![
            set.name.to_string(),
            set.columns.join(", "),
            set.description.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
