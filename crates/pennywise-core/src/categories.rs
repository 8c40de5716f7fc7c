//! Category-level spending deltas between two months

use std::collections::BTreeMap;

use crate::models::{CategoryDelta, ExpenseRecord};

/// Compare per-category spending between the current and previous month
///
/// Produces one delta per category seen in either month, skipping categories
/// whose totals are zero in both. Output is ordered by category name.
pub fn analyze(current: &[ExpenseRecord], previous: &[ExpenseRecord]) -> Vec<CategoryDelta> {
    // (current, previous)
    let mut totals: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for record in current {
        totals.entry(record.category.as_str()).or_default().0 += record.amount;
    }
    for record in previous {
        totals.entry(record.category.as_str()).or_default().1 += record.amount;
    }

    totals
        .into_iter()
        .filter(|(_, (current, previous))| *current > 0.0 || *previous > 0.0)
        .map(|(category, (current_month, previous_month))| {
            let change = current_month - previous_month;
            CategoryDelta {
                category: category.to_string(),
                current_month,
                previous_month,
                change,
                change_percent: change_percent(change, previous_month),
            }
        })
        .collect()
}

/// Magnitude of `change` relative to `previous`, in percent (0 if `previous` is 0)
pub fn change_percent(change: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (change.abs() / previous) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            amount,
            category,
            NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        )
    }

    fn find<'a>(deltas: &'a [CategoryDelta], category: &str) -> &'a CategoryDelta {
        deltas.iter().find(|d| d.category == category).unwrap()
    }

    #[test]
    fn test_increase() {
        let current = vec![record(1, 100.0, "Dining"), record(2, 50.0, "Dining")];
        let previous = vec![record(3, 100.0, "Dining")];

        let deltas = analyze(&current, &previous);
        assert_eq!(deltas.len(), 1);
        let dining = find(&deltas, "Dining");
        assert_eq!(dining.change, 50.0);
        assert_eq!(dining.change_percent, 50.0);
        assert!(dining.is_increase());
    }

    #[test]
    fn test_decrease_keeps_percent_positive() {
        let current = vec![record(1, 40.0, "Transport")];
        let previous = vec![record(2, 160.0, "Transport")];

        let deltas = analyze(&current, &previous);
        let transport = find(&deltas, "Transport");
        assert_eq!(transport.change, -120.0);
        assert_eq!(transport.change_percent, 75.0);
    }

    #[test]
    fn test_new_category_has_zero_percent() {
        let current = vec![record(1, 75.0, "Pets")];

        let deltas = analyze(&current, &[]);
        let pets = find(&deltas, "Pets");
        assert_eq!(pets.previous_month, 0.0);
        assert_eq!(pets.change, 75.0);
        assert_eq!(pets.change_percent, 0.0);
    }

    #[test]
    fn test_dropped_category_is_kept() {
        let previous = vec![record(1, 60.0, "Gym")];

        let deltas = analyze(&[], &previous);
        let gym = find(&deltas, "Gym");
        assert_eq!(gym.current_month, 0.0);
        assert_eq!(gym.change_percent, 100.0);
    }

    #[test]
    fn test_zero_activity_excluded() {
        let current = vec![record(1, 0.0, "Misc"), record(2, 10.0, "Books")];
        let previous = vec![record(3, 0.0, "Misc")];

        let deltas = analyze(&current, &previous);
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].category, "Books");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(analyze(&[], &[]).is_empty());
    }
}
