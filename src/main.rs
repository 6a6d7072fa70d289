//! tagwright - accessibility checker and fixer for HTML

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tagwright::remediate::Pass;
use tagwright::{
    ArenaDom, RemediationConfig, RemediationReport, Remediator, ValidationReport,
    map_to_structure, parse_html_bytes, validate,
};

#[derive(Parser)]
#[command(name = "tagwright")]
#[command(version, about = "Accessibility checker and fixer for HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    tagwright check page.html                 List failed rules
    tagwright fix page.html -o page.xhtml     Repair and write XHTML
    tagwright map --fix page.html             Print the structure tree")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log each pass and rule fault (overrides RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a document; exits non-zero when it is not compliant
    Check(CheckArgs),
    /// Remediate a document and write it as XHTML
    Fix(FixArgs),
    /// Print the document's structure tree as JSON
    Map(MapArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FixArgs {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// TOML file with placeholder texts
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip a remediation pass (repeatable)
    #[arg(long, value_name = "PASS")]
    skip: Vec<Pass>,

    /// Print fix counts and the re-validation report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MapArgs {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Remediate before mapping
    #[arg(long)]
    fix: bool,
}

#[derive(Serialize)]
struct FixSummary<'a> {
    remediation: &'a RemediationReport,
    validation: &'a ValidationReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Check(args) => check(&args, cli.quiet),
        Command::Fix(args) => fix(&args, cli.quiet),
        Command::Map(args) => map(&args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn load(path: &Path) -> Result<ArenaDom, String> {
    let bytes = fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_html_bytes(&bytes).map_err(|e| format!("{}: {e}", path.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

/// Returns whether the document is compliant.
fn check(args: &CheckArgs, quiet: bool) -> Result<bool, String> {
    let dom = load(&args.input)?;
    let report = validate(&dom).map_err(|e| e.to_string())?;

    if args.json {
        println!("{}", to_json(&report)?);
    } else if !quiet {
        print_report(&args.input, &report);
    }

    Ok(report.is_compliant())
}

/// Returns whether the remediated document is compliant.
fn fix(args: &FixArgs, quiet: bool) -> Result<bool, String> {
    let config = match &args.config {
        Some(path) => {
            RemediationConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => RemediationConfig::default(),
    };
    let remediator = args
        .skip
        .iter()
        .fold(Remediator::new().with_config(config), |r, &pass| r.without(pass));

    let mut dom = load(&args.input)?;
    let remediation = remediator.run(&mut dom);
    let validation = validate(&dom).map_err(|e| e.to_string())?;
    let xhtml = dom.to_xhtml();

    match &args.output {
        Some(path) => fs::write(path, &xhtml).map_err(|e| format!("{}: {e}", path.display()))?,
        None => print!("{xhtml}"),
    }

    if args.json {
        let summary = FixSummary {
            remediation: &remediation,
            validation: &validation,
        };
        eprintln!("{}", to_json(&summary)?);
    } else if !quiet {
        for outcome in remediation.outcomes.iter().filter(|o| o.fixes > 0) {
            eprintln!("{:<16} {} fix(es)", outcome.pass, outcome.fixes);
        }
        eprintln!("Total fixes: {}", remediation.total_fixes());
        for result in validation.failed() {
            eprintln!("remaining: {} {}", result.id, result.description);
        }
    }

    Ok(validation.is_compliant())
}

fn map(args: &MapArgs) -> Result<bool, String> {
    let mut dom = load(&args.input)?;
    if args.fix {
        Remediator::new().run(&mut dom);
    }
    println!("{}", to_json(&map_to_structure(&dom))?);
    Ok(true)
}

fn print_report(path: &Path, report: &ValidationReport) {
    println!("File: {}", path.display());
    for (category, results) in report.by_category() {
        let failed: Vec<_> = results.iter().filter(|r| !r.passed()).collect();
        if failed.is_empty() {
            continue;
        }
        println!("{category}");
        for result in failed {
            match &result.error_detail {
                Some(detail) => println!("  FAIL {} {} ({detail})", result.id, result.description),
                None => println!("  FAIL {} {}", result.id, result.description),
            }
        }
    }
    println!(
        "Passed: {}/{}{}",
        report.passed_count(),
        report.total(),
        if report.is_compliant() { " (compliant)" } else { "" }
    );
}
