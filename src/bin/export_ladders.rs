//! Export every institution x strategy maturity schedule to CSV
//!
//! Usage: cargo run --bin export_ladders -- --principal 100000 --output ladders.csv

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cd_ladder::report::{write_schedules, DEFAULT_PRINCIPAL};
use cd_ladder::Catalog;
use chrono::Local;
use clap::Parser;

/// Write all ladder maturity schedules as CSV rows
#[derive(Parser, Debug)]
#[command(name = "export_ladders")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount invested in every ladder (zero or negative is allowed)
    #[arg(short, long, default_value_t = DEFAULT_PRINCIPAL, allow_negative_numbers = true)]
    principal: f64,

    /// Destination CSV file
    #[arg(short, long, default_value = "ladder_schedules.csv")]
    output: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::market_rates();

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Unable to create {}", cli.output.display()))?;
    let rows = write_schedules(&catalog, cli.principal, Local::now().naive_local(), &mut writer)
        .with_context(|| format!("Unable to write {}", cli.output.display()))?;

    println!("Written {} ladder rungs to {}", rows, cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
