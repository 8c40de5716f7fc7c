//! Domain models for Pennywise

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single expense, as supplied by the transaction store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    /// Amount spent (always >= 0; validated on import)
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(id: i64, amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date,
        }
    }

    /// Whether this record falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// A single income entry (salary, refund, side gig...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: i64,
    pub amount: f64,
    pub source: String,
    pub date: NaiveDate,
}

impl IncomeRecord {
    pub fn new(id: i64, amount: f64, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            amount,
            source: source.into(),
            date,
        }
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// Income and expense totals for one calendar month
///
/// Derived on demand from records; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    /// Calendar month, 1..=12
    pub month: u32,
    pub total_expenses: f64,
    pub total_income: f64,
}

impl MonthlyTotal {
    /// A month with no activity
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            total_expenses: 0.0,
            total_income: 0.0,
        }
    }

    pub fn new(year: i32, month: u32, total_income: f64, total_expenses: f64) -> Self {
        Self {
            year,
            month,
            total_expenses,
            total_income,
        }
    }

    /// Income left over after expenses
    pub fn net(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Share of income saved, in percent (0 when there was no income)
    pub fn savings_rate(&self) -> f64 {
        if self.total_income > 0.0 {
            (self.net() / self.total_income) * 100.0
        } else {
            0.0
        }
    }

    /// Label in `YYYY-MM` form
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Month-over-month change in spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub current_month: f64,
    pub previous_month: f64,
    /// `current_month - previous_month`; carries the direction
    pub change: f64,
    /// Magnitude of the change relative to the previous month, in percent.
    /// Always >= 0, and 0 when the previous month had no spending.
    pub change_percent: f64,
}

impl CategoryDelta {
    pub fn is_increase(&self) -> bool {
        self.change > 0.0
    }
}

/// One month of projected spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// 1 for next month, 2 for the month after, ...
    pub months_ahead: u32,
    /// Calendar month being predicted, 1..=12
    pub target_month: u32,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_rate() {
        let summary = MonthlyTotal::new(2026, 3, 3000.0, 1500.0);
        assert_eq!(summary.savings_rate(), 50.0);
        assert_eq!(summary.net(), 1500.0);
    }

    #[test]
    fn test_savings_rate_without_income() {
        let summary = MonthlyTotal::new(2026, 3, 0.0, 800.0);
        assert_eq!(summary.savings_rate(), 0.0);
    }

    #[test]
    fn test_label_and_month_check() {
        let summary = MonthlyTotal::empty(2026, 2);
        assert_eq!(summary.label(), "2026-02");

        let record = ExpenseRecord::new(
            1,
            12.5,
            "Transport",
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        );
        assert!(record.is_in_month(2026, 2));
        assert!(!record.is_in_month(2025, 2));
    }
}
