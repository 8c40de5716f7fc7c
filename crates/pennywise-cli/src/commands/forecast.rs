//! Spending forecast command

use anyhow::Result;
use pennywise_core::config::MAX_HORIZON_MONTHS;
use pennywise_core::{aggregate, forecast, Config, FinanceSource, MonthlyTotal, Prediction};
use serde::Serialize;

use super::{load_source, print_json, resolve_as_of};
use crate::cli::RecordArgs;

/// Trailing history and the projection built from it
#[derive(Debug, Serialize)]
pub struct ForecastOutput {
    pub history: Vec<MonthlyTotal>,
    /// `None` when fewer than three months of history were available
    pub predictions: Option<Vec<Prediction>>,
}

pub fn build_forecast(
    config: &Config,
    records: &RecordArgs,
    horizon: Option<u32>,
) -> Result<ForecastOutput> {
    let horizon = horizon.unwrap_or(config.analysis.horizon_months);
    if horizon == 0 || horizon > MAX_HORIZON_MONTHS {
        anyhow::bail!(
            "Invalid --horizon {}: must be between 1 and {}",
            horizon,
            MAX_HORIZON_MONTHS
        );
    }

    let source = load_source(records, config)?;
    let as_of = resolve_as_of(records.as_of.as_deref())?;

    let history = aggregate::aggregate_trailing(
        &source.expenses()?,
        source.incomes(),
        config.analysis.history_months,
        as_of,
    );
    let predictions = forecast::forecast_monthly(&history, horizon);

    Ok(ForecastOutput {
        history,
        predictions,
    })
}

pub fn cmd_forecast(config: &Config, records: &RecordArgs, horizon: Option<u32>) -> Result<()> {
    let output = build_forecast(config, records, horizon)?;

    if records.json {
        return print_json(&output);
    }

    let symbol = &config.display.symbol;

    println!();
    println!("🔮 Spending Forecast");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   {:12} │ {:>12}", "Month", "Spent");
    println!("   ─────────────┼──────────────");
    for month in &output.history {
        println!(
            "   {:12} │ {:>12}",
            month.label(),
            format!("{}{:.2}", symbol, month.total_expenses)
        );
    }

    println!();
    let Some(predictions) = &output.predictions else {
        println!("   Not enough history to forecast (need at least 3 months).");
        return Ok(());
    };

    println!("   {:12} │ {:>12}", "Ahead", "Projected");
    println!("   ─────────────┼──────────────");
    for p in predictions {
        println!(
            "   {:12} │ {:>12}",
            format!("+{} (m{:02})", p.months_ahead, p.target_month),
            format!("{}{:.2}", symbol, p.amount)
        );
    }

    Ok(())
}
