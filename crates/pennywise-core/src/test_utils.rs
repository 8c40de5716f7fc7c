//! Test utilities for pennywise-core
//!
//! Record builders and a sample ledger shared by unit, integration and CLI
//! tests.

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, IncomeRecord};

/// Shorthand for a calendar date; panics on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn expense(id: i64, amount: f64, category: &str, on: NaiveDate) -> ExpenseRecord {
    ExpenseRecord::new(id, amount, category, on)
}

pub fn income(id: i64, amount: f64, source: &str, on: NaiveDate) -> IncomeRecord {
    IncomeRecord::new(id, amount, source, on)
}

/// Six months (Jan-Jun 2026) of steadily rising spending with a Shopping
/// surge in June and a flat 3000 salary
///
/// Monthly expense totals: 1000, 1100, 1050, 1200, 1150, 1300.
pub fn sample_ledger() -> (Vec<ExpenseRecord>, Vec<IncomeRecord>) {
    let mut expenses = Vec::new();
    let mut incomes = Vec::new();
    let mut next_id = 1;

    // (month, food, transport, shopping, utilities)
    let months = [
        (1, 400.0, 200.0, 250.0, 150.0),
        (2, 450.0, 200.0, 300.0, 150.0),
        (3, 420.0, 180.0, 300.0, 150.0),
        (4, 500.0, 220.0, 330.0, 150.0),
        (5, 480.0, 220.0, 300.0, 150.0),
        (6, 420.0, 130.0, 600.0, 150.0),
    ];

    for (month, food, transport, shopping, utilities) in months {
        for (amount, category, day) in [
            (food, "Food & Drinks", 5),
            (transport, "Transport", 12),
            (shopping, "Shopping", 18),
            (utilities, "Utilities", 25),
        ] {
            expenses.push(expense(next_id, amount, category, date(2026, month, day)));
            next_id += 1;
        }
        incomes.push(income(month as i64, 3000.0, "Salary", date(2026, month, 1)));
    }

    (expenses, incomes)
}

/// CSV text for [`sample_ledger`]'s expenses
pub fn sample_expenses_csv() -> String {
    let (expenses, _) = sample_ledger();
    let mut csv = String::from("id,date,category,amount\n");
    for e in expenses {
        csv.push_str(&format!("{},{},{},{:.2}\n", e.id, e.date, e.category, e.amount));
    }
    csv
}

/// CSV text for [`sample_ledger`]'s income
pub fn sample_income_csv() -> String {
    let (_, incomes) = sample_ledger();
    let mut csv = String::from("id,date,source,amount\n");
    for i in incomes {
        csv.push_str(&format!("{},{},{},{:.2}\n", i.id, i.date, i.source, i.amount));
    }
    csv
}
