use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use renewables::{RenewableAnalyzer, SUMMARY_THRESHOLD};

/// Print the renewable-energy summary for one or more state CSV files.
#[derive(Debug, Parser)]
#[command(name = "renewables-report", version, about)]
struct Args {
    /// Renewable share (percent) for the "at or above" listing.
    #[arg(short, long, default_value_t = SUMMARY_THRESHOLD, allow_negative_numbers = true)]
    threshold: f64,

    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// CSV files, loaded in order into one collection.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut analyzer = RenewableAnalyzer::new();
    for path in &args.files {
        if let Err(e) = analyzer.load(path) {
            let kind = e.kind();
            log::error!("{kind} after {} rows: {e}", analyzer.count());
            return Err(e).with_context(|| format!("{kind} loading {}", path.display()));
        }
    }

    let report = analyzer.summary_report_at(args.threshold);
    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serializing summary")?;
        println!("{text}");
    } else {
        println!("{report}");
    }
    Ok(())
}
