//! Pennywise CLI - Spending forecasts and smart insights
//!
//! Usage:
//!   pennywise insights --expenses expenses.csv --income income.csv
//!   pennywise forecast --expenses expenses.csv --horizon 3
//!   pennywise categories --expenses expenses.csv --as-of 2026-06-30
//!   pennywise summary --expenses expenses.csv --income income.csv --months 12

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let (config, origin) = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Insights { records } => commands::cmd_insights(&config, &records),
        Commands::Forecast { records, horizon } => {
            commands::cmd_forecast(&config, &records, horizon)
        }
        Commands::Categories { records } => commands::cmd_categories(&config, &records),
        Commands::Summary { records, months } => commands::cmd_summary(&config, &records, months),
        Commands::Config => commands::cmd_config(&config, &origin),
    }
}
