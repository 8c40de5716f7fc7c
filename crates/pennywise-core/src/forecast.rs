//! Monthly spending forecaster
//!
//! Projects future monthly spending with Holt's linear trend method (double
//! exponential smoothing), a small calendar-month seasonal ripple, and a hard
//! clamp relative to the most recent month.
//!
//! The constants below are fixed model parameters. Changing any of them
//! changes every prediction, so they are not exposed through configuration.

use std::f64::consts::PI;

use crate::models::{MonthlyTotal, Prediction};

/// Level smoothing factor
pub const ALPHA: f64 = 0.3;
/// Trend smoothing factor
pub const BETA: f64 = 0.2;
/// Peak deviation of the seasonal index from 1.0
pub const SEASONAL_AMPLITUDE: f64 = 0.1;
/// Predictions never drop below this share of the current month
pub const LOWER_BOUND_FACTOR: f64 = 0.6;
/// Predictions never exceed this multiple of the current month
pub const UPPER_BOUND_FACTOR: f64 = 1.8;
/// Fewer monthly points than this means there is no forecast
pub const MIN_HISTORY_MONTHS: usize = 3;
/// Default number of months to project
pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// Final smoothed state after consuming the whole series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedState {
    pub level: f64,
    pub trend: f64,
}

/// Run Holt's smoothing over `values` (oldest first)
///
/// Returns `None` when there are fewer than two points to seed the trend.
pub fn smooth(values: &[f64]) -> Option<SmoothedState> {
    if values.len() < 2 {
        return None;
    }

    let mut level = values[0];
    let mut trend = values[1] - values[0];

    for &actual in &values[1..] {
        let prev_level = level;
        level = ALPHA * actual + (1.0 - ALPHA) * (level + trend);
        trend = BETA * (level - prev_level) + (1.0 - BETA) * trend;
    }

    Some(SmoothedState { level, trend })
}

/// Multiplicative seasonal adjustment for a calendar month (1..=12)
pub fn seasonal_index(month: u32) -> f64 {
    1.0 + (month as f64 * PI / 6.0).sin() * SEASONAL_AMPLITUDE
}

/// Calendar month reached `months_ahead` months after `current_month`
pub fn target_month(current_month: u32, months_ahead: u32) -> u32 {
    (current_month + months_ahead - 1) % 12 + 1
}

/// Restrict a raw projection to the allowed band around `current_total`
///
/// With no spending in the current month there is no band; the projection is
/// only floored at zero.
pub fn clamp_to_current(raw: f64, current_total: f64) -> f64 {
    if current_total > 0.0 {
        raw.clamp(
            LOWER_BOUND_FACTOR * current_total,
            UPPER_BOUND_FACTOR * current_total,
        )
    } else {
        raw.max(0.0)
    }
}

/// Project `horizon_months` months of spending from monthly totals
///
/// `totals` is ordered oldest first and its last element is the current
/// month, whose calendar number is `current_month`. Returns `None` when fewer
/// than [`MIN_HISTORY_MONTHS`] totals are supplied.
pub fn forecast(
    totals: &[f64],
    current_month: u32,
    horizon_months: u32,
) -> Option<Vec<Prediction>> {
    if totals.len() < MIN_HISTORY_MONTHS {
        tracing::debug!(
            months = totals.len(),
            required = MIN_HISTORY_MONTHS,
            "Not enough history to forecast"
        );
        return None;
    }

    let SmoothedState { level, trend } = smooth(totals)?;
    let current_total = totals[totals.len() - 1];

    let predictions: Vec<Prediction> = (1..=horizon_months)
        .map(|months_ahead| {
            let base = level + trend * months_ahead as f64;
            let month = target_month(current_month, months_ahead);
            let raw = base * seasonal_index(month);

            Prediction {
                months_ahead,
                target_month: month,
                amount: clamp_to_current(raw, current_total),
            }
        })
        .collect();

    tracing::debug!(
        level,
        trend,
        current_total,
        horizon = horizon_months,
        "Forecast complete"
    );

    Some(predictions)
}

/// [`forecast`] over aggregated months, using the expense totals and the
/// last entry's calendar month as the current month
pub fn forecast_monthly(totals: &[MonthlyTotal], horizon_months: u32) -> Option<Vec<Prediction>> {
    let current_month = totals.last()?.month;
    let values: Vec<f64> = totals.iter().map(|t| t.total_expenses).collect();
    forecast(&values, current_month, horizon_months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
    }

    #[test]
    fn test_requires_three_months() {
        assert!(forecast(&[], 6, 6).is_none());
        assert!(forecast(&[100.0, 200.0], 6, 6).is_none());

        let predictions = forecast(&[100.0, 200.0, 300.0], 6, 6).unwrap();
        assert_eq!(predictions.len(), 6);
    }

    #[test]
    fn test_smoothing_state() {
        let state = smooth(&[1000.0, 1100.0, 1050.0, 1200.0, 1150.0, 1300.0]).unwrap();
        assert_close(state.level, 1333.12512);
        assert_close(state.trend, 75.174304);
    }

    #[test]
    fn test_known_forecast_values() {
        let totals = [1000.0, 1100.0, 1050.0, 1200.0, 1150.0, 1300.0];
        let predictions = forecast(&totals, 6, 6).unwrap();

        assert_eq!(predictions[0].months_ahead, 1);
        assert_eq!(predictions[0].target_month, 7);
        assert_close(predictions[0].amount, 1337.8844528);
        assert_eq!(predictions[5].target_month, 12);
        assert_close(predictions[5].amount, 1784.170944);
    }

    #[test]
    fn test_target_month_wraps() {
        assert_eq!(target_month(12, 1), 1);
        assert_eq!(target_month(11, 3), 2);
        assert_eq!(target_month(1, 12), 1);
    }

    #[test]
    fn test_seasonal_ripple_on_flat_history() {
        let predictions = forecast(&[100.0, 100.0, 100.0], 12, 6).unwrap();

        // January peaks at +5%, March at the full +10%, June is neutral
        assert_close(predictions[0].amount, 105.0);
        assert_close(predictions[2].amount, 110.0);
        assert_close(predictions[5].amount, 100.0);
    }

    #[test]
    fn test_declining_trend_hits_lower_bound() {
        let predictions = forecast(&[2000.0, 1500.0, 1000.0], 3, 6).unwrap();

        for p in &predictions {
            assert_close(p.amount, 600.0);
        }
    }

    #[test]
    fn test_zero_current_month_skips_clamp() {
        let predictions = forecast(&[500.0, 800.0, 0.0], 3, 3).unwrap();

        assert_close(predictions[0].amount, 1090.94895054);
        assert_close(predictions[2].amount, 1472.0);
        assert!(predictions.iter().all(|p| p.amount >= 0.0));
    }

    #[test]
    fn test_zero_current_month_floors_at_zero() {
        let predictions = forecast(&[900.0, 300.0, 0.0], 3, 6).unwrap();
        assert!(predictions.iter().all(|p| p.amount >= 0.0));
        assert_eq!(predictions.last().unwrap().amount, 0.0);
    }

    #[test]
    fn test_forecast_monthly_uses_last_month() {
        let totals = vec![
            MonthlyTotal::new(2025, 11, 0.0, 100.0),
            MonthlyTotal::new(2025, 12, 0.0, 100.0),
            MonthlyTotal::new(2026, 1, 0.0, 100.0),
        ];
        let predictions = forecast_monthly(&totals, 2).unwrap();
        assert_eq!(predictions[0].target_month, 2);
        assert_eq!(predictions[1].target_month, 3);
    }
}
