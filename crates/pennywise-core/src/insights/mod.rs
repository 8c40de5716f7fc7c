//! Smart Insights
//!
//! Turns monthly totals, a spending forecast and category deltas into a short,
//! ranked list of human-readable insights. Each insight comes from one of a
//! fixed set of independent rules; the generator pools their candidates,
//! orders them by priority and keeps the top four.
//!
//! ## Built-in Rules (by priority)
//!
//! 1. **Prediction Magnitude** - projected spending moves away from this month
//! 2. **Category Surge** - the sharpest category change vs last month
//! 3. **Savings Rate** - savings rate moved by more than 8 points
//! 4. **Top Category Tip** - a suggestion for the biggest category
//! 5. **Unusual Spike** - a category more than doubled
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pennywise_core::insights::{AnalysisContext, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let ctx = AnalysisContext::current_month(&source);
//! let report = engine.analyze(&ctx)?;
//! ```

pub mod engine;
pub mod generator;
pub mod rules;
pub mod tips;
pub mod types;

pub use engine::{AnalysisContext, InsightEngine, InsightReport};
pub use generator::{InsightGenerator, MAX_INSIGHTS};
pub use rules::{
    CategorySurgeRule, InsightRule, PredictionMagnitudeRule, RuleInput, SavingsRateRule,
    TopCategoryTipRule, UnusualSpikeRule,
};
pub use types::{Insight, InsightKind, RuleId};
