//! Alternative recommender
//!
//! Maps an expense to one cheaper substitute using an ordered, first-match
//! rule table. Matching is case-insensitive substring containment on the
//! category and description text.

use crate::models::{Alternative, Expense};

/// How a rule decides whether it applies to an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when the category contains any of `category` or the
    /// description contains any of `description`
    Keywords {
        category: &'static [&'static str],
        description: &'static [&'static str],
    },
    /// Matches every expense
    Always,
}

impl Matcher {
    /// Test the matcher against already lower-cased text
    fn matches(&self, category: &str, description: &str) -> bool {
        match self {
            Self::Keywords {
                category: category_keywords,
                description: description_keywords,
            } => {
                category_keywords.iter().any(|k| category.contains(k))
                    || description_keywords.iter().any(|k| description.contains(k))
            }
            Self::Always => true,
        }
    }
}

/// A recommendation rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Short name for listings
    pub name: &'static str,
    /// When the rule applies
    pub matcher: Matcher,
    /// Suggested substitute behavior
    pub suggestion: &'static str,
    /// Fraction of the cost eliminated by the substitute
    pub reduction_factor: f64,
}

impl Rule {
    /// The substitute's cost for `current_cost`, floored at zero
    pub fn new_cost(&self, current_cost: f64) -> f64 {
        (current_cost * (1.0 - self.reduction_factor)).max(0.0)
    }
}

/// The rule table, evaluated top to bottom. The last rule always matches.
pub static RULES: &[Rule] = &[
    Rule {
        name: "coffee",
        matcher: Matcher::Keywords {
            category: &["food"],
            description: &["coffee"],
        },
        suggestion: "Make at home - Premium coffee maker + beans",
        reduction_factor: 0.75,
    },
    Rule {
        name: "transport",
        matcher: Matcher::Keywords {
            category: &["transport"],
            description: &["uber"],
        },
        suggestion: "Bike + public transit monthly pass",
        reduction_factor: 0.80,
    },
    Rule {
        name: "streaming",
        matcher: Matcher::Keywords {
            category: &[],
            description: &["streaming"],
        },
        suggestion: "Bundle services or share family plan",
        reduction_factor: 0.50,
    },
    Rule {
        name: "gym",
        matcher: Matcher::Keywords {
            category: &[],
            description: &["gym"],
        },
        suggestion: "Home equipment or outdoor workouts",
        reduction_factor: 0.70,
    },
    Rule {
        name: "dining",
        matcher: Matcher::Keywords {
            category: &[],
            description: &["dining", "restaurant"],
        },
        suggestion: "Meal prep + occasional dining out",
        reduction_factor: 0.60,
    },
    Rule {
        name: "generic",
        matcher: Matcher::Always,
        suggestion: "Find generic/bulk alternative",
        reduction_factor: 0.30,
    },
];

/// Find the first rule that applies to an expense
pub fn select_rule(expense: &Expense) -> &'static Rule {
    let category = expense.category.to_lowercase();
    let description = expense.description.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matcher.matches(&category, &description))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Recommend an alternative for one expense.
///
/// Returns `None` when the description is empty or the cost is exactly zero.
pub fn recommend(expense: &Expense) -> Option<Alternative> {
    if !expense.is_eligible() {
        return None;
    }

    let rule = select_rule(expense);
    let new_cost = rule.new_cost(expense.current_cost);
    let savings = expense.current_cost - new_cost;

    Some(Alternative {
        expense_id: expense.id,
        suggestion: rule.suggestion.to_string(),
        new_cost,
        savings,
        annual_savings: expense.frequency.annualize(savings),
    })
}

/// Recommend alternatives for every eligible expense, in expense order
pub fn recommend_all(expenses: &[Expense]) -> Vec<Alternative> {
    expenses.iter().filter_map(recommend).collect()
}
