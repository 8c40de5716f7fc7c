//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pennywise - Forecast spending and surface smart insights
#[derive(Parser)]
#[command(name = "pennywise")]
#[command(about = "Spending forecasts and smart insights from your expense records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the data-dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record files and the month to analyze
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Expense records (CSV with date,category,amount[,id] or a .json array)
    #[arg(short, long)]
    pub expenses: PathBuf,

    /// Income records (CSV with date,amount[,id,source] or a .json array)
    #[arg(short, long)]
    pub income: Option<PathBuf>,

    /// Any date in the month to treat as current (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show ranked smart insights for the current month
    Insights {
        #[command(flatten)]
        records: RecordArgs,
    },

    /// Project monthly spending
    Forecast {
        #[command(flatten)]
        records: RecordArgs,

        /// Months to project (overrides config)
        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Compare category spending with the previous month
    Categories {
        #[command(flatten)]
        records: RecordArgs,
    },

    /// Show trailing monthly totals, running balance and health score
    Summary {
        #[command(flatten)]
        records: RecordArgs,

        /// Number of months to show (overrides config)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Show the resolved configuration
    Config,
}
