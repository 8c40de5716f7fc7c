//! Financial health score derived from a month's savings rate

use serde::{Deserialize, Serialize};

use crate::models::MonthlyTotal;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Percent of income saved (0 when there was no income)
    pub savings_rate: f64,
    /// 0..=100; a 50% savings rate or better scores 100
    pub overall: u8,
}

/// Score a month: twice the savings rate, rounded and kept within 0..=100
pub fn score(summary: &MonthlyTotal) -> HealthScore {
    let savings_rate = summary.savings_rate();
    let overall = (savings_rate * 2.0).round().clamp(0.0, 100.0) as u8;

    HealthScore {
        savings_rate,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_month() {
        let health = score(&MonthlyTotal::new(2026, 5, 4000.0, 3000.0));
        assert_eq!(health.savings_rate, 25.0);
        assert_eq!(health.overall, 50);
    }

    #[test]
    fn test_score_is_capped() {
        assert_eq!(score(&MonthlyTotal::new(2026, 5, 4000.0, 500.0)).overall, 100);
        assert_eq!(score(&MonthlyTotal::new(2026, 5, 1000.0, 2500.0)).overall, 0);
    }

    #[test]
    fn test_no_income() {
        let health = score(&MonthlyTotal::new(2026, 5, 0.0, 250.0));
        assert_eq!(health.savings_rate, 0.0);
        assert_eq!(health.overall, 0);
    }
}
