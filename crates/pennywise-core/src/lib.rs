//! Pennywise Core Library
//!
//! Forecasting and smart insights for the Pennywise expense tracker:
//! - Monthly aggregation of expense and income records
//! - Spending forecast (Holt's linear trend with a seasonal ripple)
//! - Month-over-month category deltas
//! - Ranked insight generation from independent heuristic rules
//! - Financial health score
//! - CSV/JSON record import and layered TOML configuration
//!
//! All analysis is pure and synchronous: the same inputs always produce the
//! same outputs, and nothing is cached between calls.

pub mod aggregate;
pub mod categories;
pub mod config;
pub mod error;
pub mod forecast;
pub mod health;
pub mod import;
pub mod insights;
pub mod models;
pub mod source;

/// Test utilities including record builders and a sample ledger
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, ConfigOrigin};
pub use error::{Error, Result};
pub use health::HealthScore;
pub use insights::{
    AnalysisContext, Insight, InsightEngine, InsightGenerator, InsightKind, InsightReport, RuleId,
};
pub use models::{CategoryDelta, ExpenseRecord, IncomeRecord, MonthlyTotal, Prediction};
pub use source::{FinanceSource, InMemorySource};
