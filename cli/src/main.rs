//! welfare CLI - runnable demonstrations of the `welfare_core` API.
//!
//! ```text
//! welfare majority            pairwise-majority and Borda winners of a 3-voter profile
//! welfare expected            expected utilities of small uniform lotteries
//! welfare simulate [OUTCOME]  sample a uniform lottery and tally the draws
//! ```
//!
//! Settings come from `~/.welfare/config.toml` (or `$WELFARE_CONFIG`); flags
//! override them.

mod demos;

use std::io;
use std::num::NonZeroUsize;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use welfare_config::Settings;

#[derive(Parser)]
#[command(name = "welfare")]
#[command(about = "Explore preference aggregation and expected utility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the pushups/reading/sleep profile and print the winners
    Majority,
    /// Print expected utilities of uniform lotteries under x and x²
    Expected,
    /// Sample a uniform lottery over the given outcomes
    Simulate {
        /// Outcomes of the lottery
        #[arg(default_values = ["A", "B", "C", "D"])]
        outcomes: Vec<String>,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
        /// Number of draws
        #[arg(long)]
        draws: Option<NonZeroUsize>,
    },
}

fn init_tracing(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    init_tracing(&settings);
    if let Some(err) = load_error {
        tracing::warn!("{err}; continuing with defaults");
    }

    match cli.command {
        Commands::Majority => {
            let report = demos::majority()?;
            println!(
                "pairwise majority: {} (rational: {})",
                report.majority_winner, report.majority_rational
            );
            println!(
                "borda counting:    {} (rational: {})",
                report.borda_winner, report.borda_rational
            );
        }
        Commands::Expected => {
            for row in demos::expectations()? {
                println!(
                    "{:?}: E[x] = {:.4}, E[x²] = {:.4}",
                    row.outcomes, row.identity, row.square
                );
            }
        }
        Commands::Simulate {
            outcomes,
            seed,
            draws,
        } => {
            let mut simulation = settings.simulation;
            if seed.is_some() {
                simulation.seed = seed;
            }
            if let Some(draws) = draws {
                simulation.draws = draws;
            }
            let total = simulation.draws.get();
            for (outcome, count) in demos::simulate_uniform(&outcomes, simulation)? {
                println!("{outcome}: {count} ({:.3})", count as f64 / total as f64);
            }
        }
    }

    Ok(())
}
