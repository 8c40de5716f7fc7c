//! Monthly aggregation of raw records
//!
//! Reduces expense and income records into per-month totals. Everything here
//! is recomputed from the records on every call.

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseRecord, IncomeRecord, MonthlyTotal};

/// Sum of all expenses dated in the given month
pub fn aggregate(records: &[ExpenseRecord], year: i32, month: u32) -> f64 {
    records
        .iter()
        .filter(|r| r.is_in_month(year, month))
        .fold(0.0, |total, r| total + r.amount)
}

/// Sum of all income dated in the given month
pub fn aggregate_income(records: &[IncomeRecord], year: i32, month: u32) -> f64 {
    records
        .iter()
        .filter(|r| r.is_in_month(year, month))
        .fold(0.0, |total, r| total + r.amount)
}

/// Income and expense totals for a single month
pub fn monthly_summary(
    expenses: &[ExpenseRecord],
    incomes: &[IncomeRecord],
    year: i32,
    month: u32,
) -> MonthlyTotal {
    MonthlyTotal::new(
        year,
        month,
        aggregate_income(incomes, year, month),
        aggregate(expenses, year, month),
    )
}

/// The calendar month before `(year, month)`
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// `months_back` consecutive `(year, month)` pairs ending at `as_of`'s month,
/// oldest first
pub fn month_window(months_back: u32, as_of: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(months_back as usize);
    let mut cursor = (as_of.year(), as_of.month());

    for _ in 0..months_back {
        months.push(cursor);
        cursor = previous_month(cursor.0, cursor.1);
    }

    months.reverse();
    months
}

/// Totals for the trailing `months_back` months ending at `as_of`, oldest first
///
/// Months without records are zero-filled, so the result always has exactly
/// `months_back` entries.
pub fn aggregate_trailing(
    expenses: &[ExpenseRecord],
    incomes: &[IncomeRecord],
    months_back: u32,
    as_of: NaiveDate,
) -> Vec<MonthlyTotal> {
    let totals: Vec<MonthlyTotal> = month_window(months_back, as_of)
        .into_iter()
        .map(|(year, month)| monthly_summary(expenses, incomes, year, month))
        .collect();

    tracing::debug!(
        months = totals.len(),
        as_of = %as_of,
        "Aggregated trailing monthly totals"
    );

    totals
}

/// Copies of the expense records dated in the given month
pub fn records_in_month(records: &[ExpenseRecord], year: i32, month: u32) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| r.is_in_month(year, month))
        .cloned()
        .collect()
}

/// All-time income minus all-time expenses
pub fn running_balance(expenses: &[ExpenseRecord], incomes: &[IncomeRecord]) -> f64 {
    let income = incomes.iter().fold(0.0, |total, r| total + r.amount);
    let spent = expenses.iter().fold(0.0, |total, r| total + r.amount);
    income - spent
}
