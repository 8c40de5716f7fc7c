//! Static money-saving suggestions

/// Category-specific suggestions, keyed by category name
const CATEGORY_TIPS: &[(&str, &str)] = &[
    (
        "Food & Drinks",
        "Try meal prep Sundays - can save 30-40% on food costs",
    ),
    (
        "Transport",
        "Consider ride-sharing or public transport for 20% savings",
    ),
    ("Shopping", "Use the 48-hour rule for purchases over $50"),
    (
        "Entertainment",
        "Look for free community events and happy hour deals",
    ),
    ("Utilities", "Smart thermostat can reduce bills by 10-15%"),
    ("Healthcare", "Use generic medications and preventive care"),
    (
        "Education",
        "Check for online course discounts and library resources",
    ),
];

/// General advice used when no single category stands out
const GENERAL_TIPS: &[&str] = &[
    "Pay yourself first: move savings out on payday before spending starts",
    "Review recurring subscriptions and cancel the ones you no longer use",
    "Set a weekly spending cap and check it every Sunday",
    "Keep three to six months of expenses in an emergency fund",
    "Wait a day before any unplanned purchase to avoid impulse buys",
    "Round up every purchase and put the difference into savings",
];

/// Suggestion for a category, falling back to a generic review prompt
pub fn category_tip(category: &str) -> String {
    CATEGORY_TIPS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, tip)| tip.to_string())
        .unwrap_or_else(|| format!("Review {} expenses for optimization opportunities", category))
}

/// General tip for a calendar month; rotates through the list month by month
pub fn general_tip(month: u32) -> &'static str {
    let index = (month.max(1) - 1) as usize % GENERAL_TIPS.len();
    GENERAL_TIPS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_category() {
        assert_eq!(
            category_tip("Utilities"),
            "Smart thermostat can reduce bills by 10-15%"
        );
    }

    #[test]
    fn test_unmapped_category() {
        assert_eq!(
            category_tip("Pets"),
            "Review Pets expenses for optimization opportunities"
        );
    }

    #[test]
    fn test_general_tip_rotates() {
        assert_ne!(general_tip(1), general_tip(2));
        assert_eq!(general_tip(1), general_tip(1 + GENERAL_TIPS.len() as u32));
    }
}
