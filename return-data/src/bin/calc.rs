use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use return_core::calculations::BracketSource;
use return_core::models::YearConfig;
use return_core::{Form1040, compute_return};
use return_data::{BracketCsvLoader, ConstantsLoader, FactsLoader};

/// Compute a Form 1040 return from a taxpayer facts file.
///
/// Reads taxpayer facts from JSON and computes the complete return using
/// the built-in 2025 configuration. An optional constants TOML and bracket
/// CSV override the built-in values. Degraded-mode returns (for example a
/// filing status with no bracket schedule) still exit 0; only I/O and
/// parse failures are errors.
#[derive(Parser, Debug)]
#[command(name = "return-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the taxpayer facts JSON file
    #[arg(short, long)]
    facts: PathBuf,

    /// Bracket schedule CSV overriding the built-in tables
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Year constants TOML overriding the built-in values
    #[arg(short, long)]
    constants: Option<PathBuf>,

    /// Emit the full computed return as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Line labels for the summary rendering, in form order.
const LINE_LABELS: &[(&str, &str)] = &[
    ("1z", "Wages"),
    ("2b", "Taxable interest"),
    ("3b", "Ordinary dividends"),
    ("4b", "IRA distributions, taxable"),
    ("5b", "Pensions and annuities, taxable"),
    ("6a", "Social Security benefits"),
    ("6b", "Social Security benefits, taxable"),
    ("7", "Capital gain or (loss)"),
    ("8", "Other income from Schedule 1"),
    ("9", "Total income"),
    ("10", "Adjustments to income"),
    ("11", "Adjusted gross income"),
    ("12", "Standard deduction"),
    ("13", "Qualified business income deduction"),
    ("14", "Total deductions"),
    ("15", "Taxable income"),
    ("16", "Tax"),
    ("19", "Child tax credit / other dependents"),
    ("20", "Schedule 3 nonrefundable credits"),
    ("21", "Total credits"),
    ("22", "Tax after credits"),
    ("23", "Other taxes (self-employment)"),
    ("24", "Total tax"),
    ("25a", "W-2 withholding"),
    ("25b", "1099/SSA withholding"),
    ("25d", "Total withholding"),
    ("28", "Additional child tax credit"),
    ("31", "Schedule 3 refundable credits"),
    ("32", "Other payments and refundable credits"),
    ("33", "Total payments"),
    ("34", "Overpayment (refund)"),
    ("37", "Amount you owe"),
];

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let facts = FactsLoader::load(&args.facts)
        .with_context(|| format!("failed to load facts from {}", args.facts.display()))?;

    let mut config = YearConfig::for_2025();
    if let Some(path) = &args.constants {
        config = ConstantsLoader::load(path, config)
            .with_context(|| format!("failed to load constants from {}", path.display()))?;
    }
    if let Some(path) = &args.brackets {
        let file = File::open(path)
            .with_context(|| format!("failed to open bracket CSV {}", path.display()))?;
        config.brackets = BracketCsvLoader::load(file, config.tax_year)
            .with_context(|| format!("failed to load brackets from {}", path.display()))?;
        config
            .validate()
            .context("bracket CSV produced an invalid configuration")?;
    }

    let result = compute_return(&facts, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

// Logs go to stderr so warn-level advisories never corrupt --json output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(result: &Form1040) {
    println!(
        "Form 1040, tax year {}: {}",
        result.meta.tax_year,
        result.meta.filing_status.display_name()
    );
    println!();

    for (id, label) in LINE_LABELS {
        println!("  {id:<4} {label:<40} {:>14.2}", result.line(id));
    }

    let notes = advisory_notes(result);
    if !notes.is_empty() {
        println!();
        println!("Notes:");
        for note in notes {
            println!("  - {note}");
        }
    }
}

fn advisory_notes(result: &Form1040) -> Vec<String> {
    let mut notes = Vec::new();

    if result.meta.bracket_source == BracketSource::FlatFallback {
        notes.push(format!(
            "no bracket schedule for {}; tax computed at the flat 15% fallback rate",
            result.meta.filing_status.display_name()
        ));
    }
    if result.schedule_d.loss_limited {
        notes.push(format!(
            "capital loss of {:.2} limited to {:.2} on line 7",
            result.schedule_d.total_net, result.schedule_d.line7_amount
        ));
    }
    if result.qbi.over_threshold {
        notes.push(
            "taxable income exceeds the simplified QBI threshold; Form 8995-A required"
                .to_string(),
        );
    }
    if result.schedule_se.taxpayer.below_threshold
        && result.schedule_se.taxpayer.net_profit > rust_decimal::Decimal::ZERO
    {
        notes.push("taxpayer net profit below the $400 SE filing threshold".to_string());
    }
    if result.schedule_se.spouse.below_threshold
        && result.schedule_se.spouse.net_profit > rust_decimal::Decimal::ZERO
    {
        notes.push("spouse net profit below the $400 SE filing threshold".to_string());
    }
    if result.child_credit.earned_income_below_floor {
        notes.push(
            "earned income at or below $2,500; no additional child tax credit".to_string(),
        );
    }
    if result.schedule_b.required {
        notes.push("Schedule B must accompany this return".to_string());
    }

    notes
}
