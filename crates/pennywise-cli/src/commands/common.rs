//! Shared utilities for the record-based commands
//!
//! This module contains:
//! - `load_config` - Resolve the configuration for this run
//! - `resolve_as_of` - Parse the --as-of date (defaults to today)
//! - `load_source` - Import expense and income files into a record source

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pennywise_core::{import, Config, ConfigOrigin, InMemorySource};
use tracing::debug;

use crate::cli::RecordArgs;

/// Load config from an explicit path, the data-dir override or the embedded defaults
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigOrigin)> {
    let (config, origin) = Config::load(explicit).context("Failed to load configuration")?;
    debug!("Using config from {}", origin);
    Ok((config, origin))
}

/// Resolve the date whose month is treated as current
pub fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --as-of date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Import the record files named on the command line
pub fn load_source(records: &RecordArgs, config: &Config) -> Result<InMemorySource> {
    let expenses = import::load_expenses(&records.expenses).with_context(|| {
        format!(
            "Failed to import expenses from {}",
            records.expenses.display()
        )
    })?;

    let incomes = match &records.income {
        Some(path) => import::load_income(path)
            .with_context(|| format!("Failed to import income from {}", path.display()))?,
        None => Vec::new(),
    };

    debug!(
        "Loaded {} expense and {} income records",
        expenses.len(),
        incomes.len()
    );

    Ok(InMemorySource::new(expenses, incomes).with_currency(config.display.currency.clone()))
}
