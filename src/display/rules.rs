//! Recommendation rule display
//!
//! Renders the ordered rule table as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::recommender::{Matcher, Rule};

use super::report::format_percentage;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Rule")]
    name: &'static str,
    #[tabled(rename = "Matches")]
    matches: String,
    #[tabled(rename = "Suggestion")]
    suggestion: &'static str,
    #[tabled(rename = "Cut")]
    reduction: String,
}

/// Describe what a matcher looks for
pub fn describe_matcher(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Keywords {
            category,
            description,
        } => {
            let mut parts = Vec::new();
            if !category.is_empty() {
                parts.push(format!("category ~ {}", category.join("|")));
            }
            if !description.is_empty() {
                parts.push(format!("description ~ {}", description.join("|")));
            }
            parts.join(" or ")
        }
        Matcher::Always => "anything else".to_string(),
    }
}

/// Format the rule table, in evaluation order
pub fn format_rule_table(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "No rules defined.".to_string();
    }

    let rows: Vec<RuleRow> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            order: i + 1,
            name: rule.name,
            matches: describe_matcher(&rule.matcher),
            suggestion: rule.suggestion,
            reduction: format_percentage(rule.reduction_factor * 100.0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nRules are checked top to bottom; the first match wins.",
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RULES;

    #[test]
    fn test_describe_matcher() {
        let coffee = describe_matcher(&RULES[0].matcher);
        assert_eq!(coffee, "category ~ food or description ~ coffee");
        assert_eq!(describe_matcher(&Matcher::Always), "anything else");
    }

    #[test]
    fn test_rule_table_lists_all_rules() {
        let table = format_rule_table(RULES);
        for rule in RULES {
            assert!(table.contains(rule.suggestion));
        }
        assert!(table.contains("75%"));
        assert!(table.contains("restaurant"));
    }
}
