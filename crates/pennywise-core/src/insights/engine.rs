//! Insight Engine - composes aggregation, forecasting, category deltas and
//! rule evaluation into one report

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, month_window, previous_month};
use crate::categories;
use crate::config::AnalysisConfig;
use crate::forecast::{self, DEFAULT_HORIZON_MONTHS};
use crate::health::{self, HealthScore};
use crate::models::{CategoryDelta, MonthlyTotal, Prediction};
use crate::source::FinanceSource;
use crate::Result;

use super::generator::InsightGenerator;
use super::types::Insight;

/// Context provided to the engine
pub struct AnalysisContext<'a> {
    /// Where records and monthly summaries come from
    pub source: &'a dyn FinanceSource,
    /// Any date inside the month treated as "current"
    pub as_of: NaiveDate,
    /// Trailing months fed to the forecaster
    pub history_months: u32,
    /// Months to project ahead
    pub horizon_months: u32,
}

impl<'a> AnalysisContext<'a> {
    /// Create a new analysis context with the default windows
    pub fn new(source: &'a dyn FinanceSource, as_of: NaiveDate) -> Self {
        Self {
            source,
            as_of,
            history_months: 6,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }

    /// Create context for "current month" analysis
    pub fn current_month(source: &'a dyn FinanceSource) -> Self {
        Self::new(source, chrono::Local::now().date_naive())
    }

    /// Take the windows from configuration
    pub fn with_analysis_config(mut self, config: &AnalysisConfig) -> Self {
        self.history_months = config.history_months;
        self.horizon_months = config.horizon_months;
        self
    }
}

/// Everything the presentation layer needs, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Ranked insights, at most four
    pub insights: Vec<Insight>,
    pub category_deltas: Vec<CategoryDelta>,
    /// `None` when there was not enough history
    pub predictions: Option<Vec<Prediction>>,
    /// Trailing monthly totals the forecast was built from, oldest first
    pub history: Vec<MonthlyTotal>,
    pub current: MonthlyTotal,
    pub previous: MonthlyTotal,
    pub health: HealthScore,
    /// Display currency reported by the source
    pub currency: String,
}

impl InsightReport {
    pub fn current_month_total(&self) -> f64 {
        self.current.total_expenses
    }

    pub fn previous_month_total(&self) -> f64 {
        self.previous.total_expenses
    }
}

/// Runs the full insight pipeline against a record source
pub struct InsightEngine {
    generator: InsightGenerator,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        Self {
            generator: InsightGenerator::new(),
        }
    }

    /// Create an engine around a customized generator
    pub fn with_generator(generator: InsightGenerator) -> Self {
        Self { generator }
    }

    /// Analyze the month containing `ctx.as_of`
    ///
    /// Only reading from the source can fail; the analysis itself is total.
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<InsightReport> {
        let (year, month) = (ctx.as_of.year(), ctx.as_of.month());
        let (prev_year, prev_month) = previous_month(year, month);

        let expenses = ctx.source.expenses()?;
        let current = ctx.source.monthly_summary(year, month)?;
        let previous = ctx.source.monthly_summary(prev_year, prev_month)?;

        let history = month_window(ctx.history_months, ctx.as_of)
            .into_iter()
            .map(|(y, m)| ctx.source.monthly_summary(y, m))
            .collect::<Result<Vec<_>>>()?;

        let predictions = forecast::forecast_monthly(&history, ctx.horizon_months);

        let current_records = aggregate::records_in_month(&expenses, year, month);
        let previous_records = aggregate::records_in_month(&expenses, prev_year, prev_month);
        let category_deltas = categories::analyze(&current_records, &previous_records);

        let insights = self.generator.generate(
            &current,
            &previous,
            predictions.as_deref(),
            &category_deltas,
        );

        tracing::info!(
            month = %current.label(),
            insights = insights.len(),
            categories = category_deltas.len(),
            forecast = predictions.is_some(),
            "Insight analysis complete"
        );

        Ok(InsightReport {
            insights,
            category_deltas,
            predictions,
            history,
            current,
            previous,
            health: health::score(&current),
            currency: ctx.source.currency().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::{InsightKind, RuleId};
    use crate::models::{ExpenseRecord, IncomeRecord};
    use crate::source::InMemorySource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_analyze_empty_source() {
        let source = InMemorySource::new(vec![], vec![]);
        let ctx = AnalysisContext::new(&source, date(2026, 5, 20));

        let report = InsightEngine::new().analyze(&ctx).unwrap();
        assert!(report.insights.is_empty());
        assert!(report.category_deltas.is_empty());
        // Six zero months still count as history
        assert_eq!(report.history.len(), 6);
        assert_eq!(report.current_month_total(), 0.0);
        assert_eq!(report.health.overall, 0);
    }

    #[test]
    fn test_analyze_short_window_has_no_forecast() {
        let source = InMemorySource::new(
            vec![ExpenseRecord::new(1, 300.0, "Shopping", date(2026, 5, 2))],
            vec![],
        );
        let config = AnalysisConfig {
            history_months: 2,
            horizon_months: 6,
        };
        let ctx = AnalysisContext::new(&source, date(2026, 5, 20)).with_analysis_config(&config);

        let report = InsightEngine::new().analyze(&ctx).unwrap();
        assert!(report.predictions.is_none());
        assert!(report
            .insights
            .iter()
            .all(|i| i.rule != RuleId::PredictionMagnitude));
    }

    #[test]
    fn test_analyze_month_over_month() {
        let expenses = vec![
            ExpenseRecord::new(1, 200.0, "Shopping", date(2026, 4, 3)),
            ExpenseRecord::new(2, 500.0, "Shopping", date(2026, 5, 9)),
            ExpenseRecord::new(3, 400.0, "Utilities", date(2026, 5, 1)),
            ExpenseRecord::new(4, 380.0, "Utilities", date(2026, 4, 1)),
        ];
        let incomes = vec![
            IncomeRecord::new(1, 3000.0, "Salary", date(2026, 4, 1)),
            IncomeRecord::new(2, 3000.0, "Salary", date(2026, 5, 1)),
        ];
        let source = InMemorySource::new(expenses, incomes).with_currency("USD");
        let ctx = AnalysisContext::new(&source, date(2026, 5, 31));

        let report = InsightEngine::new().analyze(&ctx).unwrap();

        assert_eq!(report.current_month_total(), 900.0);
        assert_eq!(report.previous_month_total(), 580.0);
        assert_eq!(report.category_deltas.len(), 2);
        assert_eq!(report.currency, "USD");

        let surge = report
            .insights
            .iter()
            .find(|i| i.rule == RuleId::CategorySurge)
            .unwrap();
        assert_eq!(surge.kind, InsightKind::Warning);
        assert!(surge.message.contains("Shopping"));

        assert!(report.insights.len() <= 4);
        assert!(report
            .insights
            .windows(2)
            .all(|w| w[0].priority <= w[1].priority));
    }
}
