//! Record sources feeding the insight engine
//!
//! The engine never stores records itself. It reads them through
//! [`FinanceSource`], which mirrors the read accessors of the transaction
//! store: all expenses, a month's income/expense totals, and the display
//! currency.

use crate::aggregate;
use crate::error::Result;
use crate::models::{ExpenseRecord, IncomeRecord, MonthlyTotal};

/// Read-only access to a user's financial records
pub trait FinanceSource: Send + Sync {
    /// All expense records for the user
    fn expenses(&self) -> Result<Vec<ExpenseRecord>>;

    /// Income and expense totals for a calendar month
    fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlyTotal>;

    /// ISO currency code used for display (not used by any calculation)
    fn currency(&self) -> &str;
}

/// A source backed by records already loaded into memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    expenses: Vec<ExpenseRecord>,
    incomes: Vec<IncomeRecord>,
    currency: String,
}

impl InMemorySource {
    pub fn new(expenses: Vec<ExpenseRecord>, incomes: Vec<IncomeRecord>) -> Self {
        Self {
            expenses,
            incomes,
            currency: "USD".to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn incomes(&self) -> &[IncomeRecord] {
        &self.incomes
    }

    /// All-time income minus all-time expenses
    pub fn running_balance(&self) -> f64 {
        aggregate::running_balance(&self.expenses, &self.incomes)
    }
}

impl FinanceSource for InMemorySource {
    fn expenses(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(self.expenses.clone())
    }

    // Computed fresh on every call so new records are always reflected
    fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlyTotal> {
        Ok(aggregate::monthly_summary(
            &self.expenses,
            &self.incomes,
            year,
            month,
        ))
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_in_memory_summary() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let source = InMemorySource::new(
            vec![ExpenseRecord::new(1, 40.0, "Transport", date)],
            vec![IncomeRecord::new(1, 1000.0, "Salary", date)],
        )
        .with_currency("EUR");

        let summary = source.monthly_summary(2026, 3).unwrap();
        assert_eq!(summary.total_expenses, 40.0);
        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(source.currency(), "EUR");
        assert_eq!(source.running_balance(), 960.0);

        let empty = source.monthly_summary(2026, 4).unwrap();
        assert_eq!(empty, MonthlyTotal::empty(2026, 4));
    }
}
