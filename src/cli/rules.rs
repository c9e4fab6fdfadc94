//! CLI command for the recommendation rules

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_currency, format_rule_table};
use crate::error::AltResult;
use crate::models::{Expense, Frequency};
use crate::services::recommender::{recommend, select_rule};
use crate::services::RULES;

/// Arguments for `rules`
#[derive(Args, Debug, Clone, Default)]
pub struct RulesArgs {
    /// Show which rule applies to this description
    #[arg(long, value_name = "DESCRIPTION")]
    pub check: Option<String>,

    /// Category to check along with --check
    #[arg(long, requires = "check")]
    pub category: Option<String>,

    /// Cost to price the suggestion with, along with --check
    #[arg(long, requires = "check")]
    pub cost: Option<f64>,
}

/// Handle the rules command
pub fn handle_rules_command(settings: &Settings, args: RulesArgs) -> AltResult<()> {
    let Some(description) = args.check else {
        println!("{}", format_rule_table(RULES));
        return Ok(());
    };

    let expense = Expense::new(
        args.category.unwrap_or_default(),
        description,
        args.cost.unwrap_or(0.0),
        Frequency::Monthly,
    );

    let rule = select_rule(&expense);
    println!("Rule:       {}", rule.name);
    println!("Suggestion: {}", rule.suggestion);
    println!("Reduction:  {}%", rule.reduction_factor * 100.0);

    match recommend(&expense) {
        Some(alternative) => {
            println!(
                "New cost:   {}{} (saves {} a year if paid monthly)",
                settings.currency_symbol,
                format_amount(alternative.new_cost),
                format_currency(alternative.annual_savings, &settings.currency_symbol, 2)
            );
        }
        None if args.cost.is_some() => {
            println!("No recommendation: a description and a non-zero cost are required.");
        }
        None => {}
    }

    Ok(())
}
