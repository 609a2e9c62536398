//! clean-courses - clean the raw course CSV produced by the scraper.

use anyhow::Context;
use clap::Parser;
use room_schedule::data::{read_csv, write_csv, LoaderError, RecordCleaner};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Clean the raw course CSV produced by the scraper.
///
/// Trims Location/Day/Time, drops online sections, treats "n/a" spellings as
/// missing and removes rows without a Location, Day or Time.
#[derive(Parser)]
#[command(name = "clean-courses", version)]
struct Cli {
    /// Path to input CSV
    #[arg(long = "in", value_name = "PATH", default_value = "SP25_UIUC_courses.csv")]
    infile: PathBuf,

    /// Path for cleaned CSV
    #[arg(long = "out", value_name = "PATH", default_value = "SP25_UIUC_courses_clean.csv")]
    outfile: PathBuf,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// 1234567 -> "1,234,567"
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    if !cli.infile.is_file() {
        return Err(LoaderError::FileNotFound(cli.infile.clone()).into());
    }
    writeln!(out, "Reading  : {}", cli.infile.display())?;
    let raw = read_csv(&cli.infile)?;

    writeln!(out, "Cleaning …")?;
    let (cleaned, report) = RecordCleaner::clean_with_report(&raw)
        .with_context(|| format!("cleaning {}", cli.infile.display()))?;

    write_csv(&cleaned, &cli.outfile)?;
    writeln!(out, "Wrote     : {}", cli.outfile.display())?;
    writeln!(
        out,
        "Rows kept : {} of {}",
        group_thousands(report.kept_rows),
        group_thousands(report.raw_rows)
    )?;
    tracing::debug!(
        online = report.online_removed,
        incomplete = report.incomplete_removed,
        "rows removed"
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Exits with status 1 and "Error: Input file not found: ..." when missing.
    run(&cli, &mut std::io::stdout().lock())
}
