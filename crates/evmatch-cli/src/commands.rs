use colored::Colorize;
use evmatch_diff::{Discrepancy, DiscrepancyKind, Report};

use crate::cli::*;
use crate::config::{load_options, load_tree};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, cli.format),
    }
}

fn cmd_compare(args: CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref(), args.strict)?;
    let expected = load_tree(&args.expected)?;
    let actual = load_tree(&args.actual)?;

    let report = options.report(&expected, &actual)?;
    match format {
        OutputFormat::Text => print_text(&report, options.strict),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_empty() {
        anyhow::bail!("{} discrepancies found", report.len());
    }
    Ok(())
}

fn print_text(report: &Report, strict: bool) {
    let mode = if strict { "strict" } else { "subset" };
    if report.is_empty() {
        println!("{} No differences ({} comparison).", "✓".green().bold(), mode);
        return;
    }

    println!("{}", evmatch_diff::REPORT_HEADER.bold());
    for discrepancy in report {
        println!("  {}", format_line(discrepancy));
    }
    println!(
        "\n{} missing, {} unexpected, {} mismatched ({} comparison)",
        report.missing_keys().to_string().red(),
        report.unexpected_keys().to_string().yellow(),
        report.value_mismatches().to_string().cyan(),
        mode
    );
}

fn format_line(discrepancy: &Discrepancy) -> String {
    let marker = match discrepancy.kind() {
        DiscrepancyKind::MissingKey => "-".red(),
        DiscrepancyKind::UnexpectedKey => "+".yellow(),
        DiscrepancyKind::ValueMismatch { .. } => "~".cyan(),
    };
    format!("{marker} {discrepancy}")
}
