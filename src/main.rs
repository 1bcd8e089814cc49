//! CD Ladder Simulator CLI
//!
//! Prints the CD rate comparison and ladder analysis to stdout

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use cd_ladder::report::{
    DEFAULT_HOME_INSTITUTION, DEFAULT_PRINCIPAL, DEFAULT_RECOMMENDED_STRATEGY, DEFAULT_TOP_N,
};
use cd_ladder::{Catalog, ReportOptions, ReportRenderer};
use chrono::Local;
use clap::Parser;

/// CD rate comparison and ladder strategy simulator
#[derive(Parser, Debug)]
#[command(name = "cd_ladder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount invested in every simulated ladder (zero or negative is allowed)
    #[arg(short, long, default_value_t = DEFAULT_PRINCIPAL, allow_negative_numbers = true)]
    principal: f64,

    /// Institution compared against the rest of the market
    #[arg(long, default_value = DEFAULT_HOME_INSTITUTION)]
    home: String,

    /// Ladder shown in full for the home institution (key or name)
    #[arg(short, long, default_value = DEFAULT_RECOMMENDED_STRATEGY)]
    strategy: String,

    /// Number of top-ranked institutions in the strategy comparison
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Emit the report data as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn run<W: Write>(cli: Cli, out: W) -> Result<()> {
    let catalog = Catalog::market_rates();
    let options = ReportOptions {
        principal: cli.principal,
        home_institution: cli.home,
        recommended_strategy: cli.strategy,
        top_n: cli.top,
    };

    let mut renderer = ReportRenderer::new(&catalog, options, Local::now().naive_local(), out);

    if cli.json {
        renderer.write_json()?;
    } else {
        renderer.generate()?;
    }
    Ok(())
}

/// One-line failure message, written to the same stream as the report
fn write_error<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "[ERROR] {:#}", err)
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout may already be gone; the exit code still reports failure
            let _ = write_error(&mut io::stdout(), &e);
            ExitCode::FAILURE
        }
    }
}
