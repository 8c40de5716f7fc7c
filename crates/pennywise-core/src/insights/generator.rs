//! Insight generator - evaluates the rule pipeline and ranks the results

use crate::models::{CategoryDelta, MonthlyTotal, Prediction};

use super::rules::{
    CategorySurgeRule, InsightRule, PredictionMagnitudeRule, RuleInput, SavingsRateRule,
    TopCategoryTipRule, UnusualSpikeRule,
};
use super::types::{Insight, RuleId};

/// Maximum number of insights returned by [`InsightGenerator::generate`]
pub const MAX_INSIGHTS: usize = 4;

/// Evaluates a fixed, ordered set of rules and keeps the most important results
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
    currency_symbol: String,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules
    pub fn new() -> Self {
        let mut generator = Self {
            rules: vec![],
            currency_symbol: "$".to_string(),
        };

        // Register built-in rules in priority order
        generator.register(Box::new(PredictionMagnitudeRule::new()));
        generator.register(Box::new(CategorySurgeRule::new()));
        generator.register(Box::new(SavingsRateRule::new()));
        generator.register(Box::new(TopCategoryTipRule::new()));
        generator.register(Box::new(UnusualSpikeRule::new()));

        generator
    }

    /// Use a different prefix when rendering amounts
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Append a rule; it is evaluated after the ones already registered
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Identifiers of the registered rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Evaluate every rule and return the top insights, most important first
    ///
    /// Ties in priority keep the order in which rules emitted them.
    pub fn generate(
        &self,
        current: &MonthlyTotal,
        previous: &MonthlyTotal,
        predictions: Option<&[Prediction]>,
        category_deltas: &[CategoryDelta],
    ) -> Vec<Insight> {
        let input = RuleInput {
            current,
            previous,
            predictions,
            category_deltas,
            currency_symbol: &self.currency_symbol,
        };

        let mut candidates = Vec::new();
        for rule in &self.rules {
            let emitted = rule.evaluate(&input);
            if !emitted.is_empty() {
                tracing::debug!(
                    rule = rule.id().as_str(),
                    count = emitted.len(),
                    "Insight rule fired"
                );
            }
            candidates.extend(emitted);
        }

        candidates.sort_by_key(|insight| insight.priority);
        candidates.truncate(MAX_INSIGHTS);
        candidates
    }
}
