//! Report command implementations

use anyhow::Result;
use chrono::Datelike;
use pennywise_core::aggregate::{self, previous_month};
use pennywise_core::health::{self, HealthScore};
use pennywise_core::{categories, CategoryDelta, Config, FinanceSource, MonthlyTotal};
use serde::Serialize;

use super::{load_source, print_json, resolve_as_of, truncate};
use crate::cli::RecordArgs;

/// Category deltas between the current and previous month
pub fn build_category_deltas(config: &Config, records: &RecordArgs) -> Result<Vec<CategoryDelta>> {
    let source = load_source(records, config)?;
    let as_of = resolve_as_of(records.as_of.as_deref())?;

    let (year, month) = (as_of.year(), as_of.month());
    let (prev_year, prev_month) = previous_month(year, month);

    let expenses = source.expenses()?;
    let current = aggregate::records_in_month(&expenses, year, month);
    let previous = aggregate::records_in_month(&expenses, prev_year, prev_month);

    Ok(categories::analyze(&current, &previous))
}

pub fn cmd_categories(config: &Config, records: &RecordArgs) -> Result<()> {
    let deltas = build_category_deltas(config, records)?;

    if records.json {
        return print_json(&deltas);
    }

    println!();
    println!("📊 Category Changes");
    println!("   ─────────────────────────────────────────────────────────────");

    if deltas.is_empty() {
        println!("   No spending in this month or the previous one.");
        return Ok(());
    }

    println!(
        "   {:25} │ {:>10} │ {:>10} │ {:>8}",
        "Category", "Current", "Previous", "Change"
    );
    println!("   ──────────────────────────┼────────────┼────────────┼──────────");

    for delta in &deltas {
        let sign = if delta.change < 0.0 { "-" } else { "+" };
        println!(
            "   {:25} │ {:>10.2} │ {:>10.2} │ {:>8}",
            truncate(&delta.category, 25),
            delta.current_month,
            delta.previous_month,
            format!("{}{:.1}%", sign, delta.change_percent)
        );
    }

    Ok(())
}

/// Trailing totals plus all-time balance and the current month's score
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    /// Oldest first; the last entry is the current month
    pub months: Vec<MonthlyTotal>,
    pub running_balance: f64,
    pub health: HealthScore,
}

pub fn build_summary(
    config: &Config,
    records: &RecordArgs,
    months: Option<u32>,
) -> Result<SummaryOutput> {
    let months_back = months.unwrap_or(config.analysis.history_months);
    if months_back == 0 {
        anyhow::bail!("--months must be at least 1");
    }

    let source = load_source(records, config)?;
    let as_of = resolve_as_of(records.as_of.as_deref())?;

    let totals =
        aggregate::aggregate_trailing(&source.expenses()?, source.incomes(), months_back, as_of);
    let current = source.monthly_summary(as_of.year(), as_of.month())?;

    Ok(SummaryOutput {
        months: totals,
        running_balance: source.running_balance(),
        health: health::score(&current),
    })
}

pub fn cmd_summary(config: &Config, records: &RecordArgs, months: Option<u32>) -> Result<()> {
    let summary = build_summary(config, records, months)?;

    if records.json {
        return print_json(&summary);
    }

    println!();
    println!("📅 Monthly Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:8} │ {:>10} │ {:>10} │ {:>10} │ {:>7}",
        "Month", "Income", "Expenses", "Net", "Saved"
    );
    println!("   ─────────┼────────────┼────────────┼────────────┼─────────");

    for month in &summary.months {
        println!(
            "   {:8} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>6.1}%",
            month.label(),
            month.total_income,
            month.total_expenses,
            month.net(),
            month.savings_rate()
        );
    }

    println!();
    println!(
        "   Running balance: {}{:.2}",
        config.display.symbol, summary.running_balance
    );
    println!(
        "   Health score:    {}/100 (savings rate {:.1}%)",
        summary.health.overall, summary.health.savings_rate
    );

    Ok(())
}
