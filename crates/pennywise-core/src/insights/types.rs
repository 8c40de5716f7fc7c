//! Core types for the insight generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of insight, mapped to an icon and color by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Forward-looking projection
    Prediction,
    /// Something improved
    Success,
    /// Something got worse or needs a look
    Warning,
    /// Actionable money-saving suggestion
    Tip,
    /// Neutral observation
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Prediction => "prediction",
            InsightKind::Success => "success",
            InsightKind::Warning => "warning",
            InsightKind::Tip => "tip",
            InsightKind::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prediction" => Ok(InsightKind::Prediction),
            "success" => Ok(InsightKind::Success),
            "warning" => Ok(InsightKind::Warning),
            "tip" => Ok(InsightKind::Tip),
            "info" => Ok(InsightKind::Info),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// Identifies the heuristic that produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Projected spending moves away from the current month
    PredictionMagnitude,
    /// One category jumped or fell sharply
    CategorySurge,
    /// Savings rate moved by several points
    SavingsRate,
    /// Suggestion for the biggest category
    TopCategoryTip,
    /// Category more than doubled
    UnusualSpike,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::PredictionMagnitude => "prediction_magnitude",
            RuleId::CategorySurge => "category_surge",
            RuleId::SavingsRate => "savings_rate",
            RuleId::TopCategoryTip => "top_category_tip",
            RuleId::UnusualSpike => "unusual_spike",
        }
    }

    /// Priority of insights from this rule (lower = more important)
    pub fn priority(&self) -> u8 {
        match self {
            RuleId::PredictionMagnitude => 1,
            RuleId::CategorySurge => 2,
            RuleId::SavingsRate => 3,
            RuleId::TopCategoryTip => 4,
            RuleId::UnusualSpike => 5,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ranked, human-readable observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Lower = more important
    pub priority: u8,
    pub message: String,
    /// Rule that produced this insight
    pub rule: RuleId,
}

impl Insight {
    /// Create an insight carrying its rule's priority
    pub fn new(rule: RuleId, kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority: rule.priority(),
            message: message.into(),
            rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_names() {
        assert_eq!(InsightKind::Tip.as_str(), "tip");
        assert_eq!(
            InsightKind::from_str("warning").unwrap(),
            InsightKind::Warning
        );
        assert!(InsightKind::from_str("alert").is_err());
    }

    #[test]
    fn test_rule_priorities_are_ordered() {
        let rules = [
            RuleId::PredictionMagnitude,
            RuleId::CategorySurge,
            RuleId::SavingsRate,
            RuleId::TopCategoryTip,
            RuleId::UnusualSpike,
        ];
        for pair in rules.windows(2) {
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn test_insight_serializes_kind_as_type() {
        let insight = Insight::new(RuleId::SavingsRate, InsightKind::Success, "Saved more");
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["type"], "success");
        assert_eq!(json["priority"], 3);
        assert_eq!(json["rule"], "savings_rate");
    }
}
