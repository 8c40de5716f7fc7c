//! Built-in insight rules
//!
//! Each rule inspects the same [`RuleInput`] independently and yields zero or
//! more candidate insights. Rules never fail: missing input means no output.

use crate::models::{CategoryDelta, MonthlyTotal, Prediction};

use super::tips;
use super::types::{Insight, InsightKind, RuleId};

/// Everything a rule may look at
pub struct RuleInput<'a> {
    pub current: &'a MonthlyTotal,
    pub previous: &'a MonthlyTotal,
    /// `None` when there was not enough history to forecast
    pub predictions: Option<&'a [Prediction]>,
    pub category_deltas: &'a [CategoryDelta],
    /// Prefix used when rendering amounts in messages
    pub currency_symbol: &'a str,
}

impl RuleInput<'_> {
    /// Render an amount as `<symbol><whole units>`
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.0}", self.currency_symbol, amount)
    }
}

/// A single heuristic in the insight pipeline
pub trait InsightRule: Send + Sync {
    /// Unique identifier, which also fixes the priority of emitted insights
    fn id(&self) -> RuleId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return its candidates
    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight>;
}

/// Relative difference from `current`, in percent
fn percent_vs(amount: f64, current: f64) -> f64 {
    (amount - current) / current * 100.0
}

/// Flags projections that move away from this month's spending
pub struct PredictionMagnitudeRule {
    /// Threshold for the 1-month projection, in percent
    next_month_threshold: f64,
    /// Threshold for the 3-month projection, in percent
    three_month_threshold: f64,
}

impl PredictionMagnitudeRule {
    pub fn new() -> Self {
        Self {
            next_month_threshold: 5.0,
            three_month_threshold: 10.0,
        }
    }
}

impl Default for PredictionMagnitudeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for PredictionMagnitudeRule {
    fn id(&self) -> RuleId {
        RuleId::PredictionMagnitude
    }

    fn name(&self) -> &'static str {
        "Prediction Magnitude"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight> {
        let Some(predictions) = input.predictions else {
            return vec![];
        };
        let current = input.current.total_expenses;
        if current <= 0.0 {
            return vec![];
        }

        let mut insights = Vec::new();

        if let Some(next) = predictions.iter().find(|p| p.months_ahead == 1) {
            let change = percent_vs(next.amount, current);
            if change.abs() > self.next_month_threshold {
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Prediction,
                    format!(
                        "Your total spending next month is projected at {} ({:+.0}% vs current month)",
                        input.money(next.amount),
                        change
                    ),
                ));
            }
        }

        if let Some(third) = predictions.iter().find(|p| p.months_ahead == 3) {
            let change = percent_vs(third.amount, current);
            if change.abs() > self.three_month_threshold {
                let direction = if change > 0.0 {
                    "increasing"
                } else {
                    "decreasing"
                };
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Prediction,
                    format!(
                        "3-month forecast: your spending trend suggests {} per month ({} trend)",
                        input.money(third.amount),
                        direction
                    ),
                ));
            }
        }

        insights
    }
}

/// Reports the category with the sharpest month-over-month move
pub struct CategorySurgeRule {
    min_percent: f64,
    min_amount: f64,
    /// Larger percentages come from near-zero baselines and are ignored
    max_percent: f64,
}

impl CategorySurgeRule {
    pub fn new() -> Self {
        Self {
            min_percent: 25.0,
            min_amount: 100.0,
            max_percent: 500.0,
        }
    }
}

impl Default for CategorySurgeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for CategorySurgeRule {
    fn id(&self) -> RuleId {
        RuleId::CategorySurge
    }

    fn name(&self) -> &'static str {
        "Category Surge"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight> {
        let mut significant: Vec<&CategoryDelta> = input
            .category_deltas
            .iter()
            .filter(|d| {
                d.change_percent > self.min_percent
                    && d.change.abs() > self.min_amount
                    && d.change_percent <= self.max_percent
            })
            .collect();

        // Stable sort keeps input order among equal percentages
        significant.sort_by(|a, b| {
            b.change_percent
                .partial_cmp(&a.change_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let Some(top) = significant.first() else {
            return vec![];
        };

        let (kind, verb) = if top.is_increase() {
            (InsightKind::Warning, "surged")
        } else {
            (InsightKind::Success, "dropped")
        };

        vec![Insight::new(
            self.id(),
            kind,
            format!(
                "{} spending {} {:.0}% ({}) vs last month",
                top.category,
                verb,
                top.change_percent,
                input.money(top.change.abs())
            ),
        )]
    }
}

/// Compares savings rates between the two months
pub struct SavingsRateRule {
    /// Minimum move in percentage points
    min_points: f64,
}

impl SavingsRateRule {
    pub fn new() -> Self {
        Self { min_points: 8.0 }
    }
}

impl Default for SavingsRateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SavingsRateRule {
    fn id(&self) -> RuleId {
        RuleId::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight> {
        let current_rate = input.current.savings_rate();
        let previous_rate = input.previous.savings_rate();
        let change = current_rate - previous_rate;

        if change.abs() <= self.min_points {
            return vec![];
        }

        let (kind, verb) = if change > 0.0 {
            (InsightKind::Success, "improved")
        } else {
            (InsightKind::Warning, "declined")
        };

        vec![Insight::new(
            self.id(),
            kind,
            format!(
                "Savings rate {} by {:.1}% (now {:.1}%)",
                verb,
                change.abs(),
                current_rate
            ),
        )]
    }
}

/// Pairs the biggest category with a suggestion, or offers a general tip
pub struct TopCategoryTipRule {
    min_amount: f64,
}

impl TopCategoryTipRule {
    pub fn new() -> Self {
        Self { min_amount: 50.0 }
    }
}

impl Default for TopCategoryTipRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for TopCategoryTipRule {
    fn id(&self) -> RuleId {
        RuleId::TopCategoryTip
    }

    fn name(&self) -> &'static str {
        "Top Category Tip"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight> {
        // First category wins a tie
        let top = input
            .category_deltas
            .iter()
            .filter(|d| d.current_month > self.min_amount)
            .reduce(|best, d| {
                if d.current_month > best.current_month {
                    d
                } else {
                    best
                }
            });

        if let Some(top) = top {
            return vec![Insight::new(
                self.id(),
                InsightKind::Tip,
                format!(
                    "{}: {} this month. {}",
                    top.category,
                    input.money(top.current_month),
                    tips::category_tip(&top.category)
                ),
            )];
        }

        if input.current.total_expenses > 0.0 {
            return vec![Insight::new(
                self.id(),
                InsightKind::Tip,
                format!("Money tip: {}", tips::general_tip(input.current.month)),
            )];
        }

        vec![]
    }
}

/// Flags a category that more than doubled
pub struct UnusualSpikeRule {
    min_percent: f64,
    min_amount: f64,
}

impl UnusualSpikeRule {
    pub fn new() -> Self {
        Self {
            min_percent: 100.0,
            min_amount: 50.0,
        }
    }
}

impl Default for UnusualSpikeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for UnusualSpikeRule {
    fn id(&self) -> RuleId {
        RuleId::UnusualSpike
    }

    fn name(&self) -> &'static str {
        "Unusual Spike"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Vec<Insight> {
        input
            .category_deltas
            .iter()
            .find(|d| d.change_percent > self.min_percent && d.current_month > self.min_amount)
            .map(|d| {
                Insight::new(
                    self.id(),
                    InsightKind::Warning,
                    format!(
                        "Unusual spike in {} spending detected. Review recent transactions for accuracy",
                        d.category
                    ),
                )
            })
            .into_iter()
            .collect()
    }
}
