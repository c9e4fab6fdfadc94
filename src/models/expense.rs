//! Expense model
//!
//! One recurring cost line item, entered in the unit of its own frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::Frequency;
use super::ids::ExpenseId;

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, stable for the lifetime of the record
    #[serde(default)]
    pub id: ExpenseId,

    /// Free-text category (e.g., "Food")
    #[serde(default)]
    pub category: String,

    /// Free-text description (e.g., "Daily coffee")
    #[serde(default)]
    pub description: String,

    /// Cost per `frequency` period
    #[serde(default)]
    pub current_cost: f64,

    /// How often the cost is paid
    #[serde(default)]
    pub frequency: Frequency,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        current_cost: f64,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            category: category.into(),
            description: description.into(),
            current_cost,
            frequency,
        }
    }

    /// A blank row: no labels, zero cost, billed monthly
    pub fn blank() -> Self {
        Self::new("", "", 0.0, Frequency::Monthly)
    }

    /// The cost normalized to a yearly total
    pub fn annual_cost(&self) -> f64 {
        self.frequency.annualize(self.current_cost)
    }

    /// Whether this expense can receive an alternative.
    ///
    /// Rows without a description or with a cost of exactly zero are skipped.
    pub fn is_eligible(&self) -> bool {
        !self.description.is_empty() && self.current_cost != 0.0
    }

    /// Apply a single field update in place
    pub fn apply(&mut self, update: ExpenseUpdate) {
        match update {
            ExpenseUpdate::Category(category) => self.category = category,
            ExpenseUpdate::Description(description) => self.description = description,
            ExpenseUpdate::CurrentCost(cost) => self.current_cost = cost,
            ExpenseUpdate::Frequency(frequency) => self.frequency = frequency,
        }
    }

    /// Parse a `Category|Description|Cost|frequency` spec.
    ///
    /// Missing trailing fields fall back to blank/zero/monthly.
    pub fn parse_spec(spec: &str) -> Result<Self, ExpenseParseError> {
        let parts: Vec<&str> = spec.split('|').map(str::trim).collect();
        if parts.len() > 4 {
            return Err(ExpenseParseError::TooManyFields(parts.len()));
        }

        let category = parts.first().copied().unwrap_or_default();
        let description = parts.get(1).copied().unwrap_or_default();
        let cost = match parts.get(2) {
            Some(raw) if !raw.is_empty() => parse_cost_strict(raw)?,
            _ => 0.0,
        };
        let frequency = parts
            .get(3)
            .map(|raw| Frequency::from_label(raw))
            .unwrap_or_default();

        Ok(Self::new(category, description, cost, frequency))
    }
}

impl Default for Expense {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = if self.description.is_empty() {
            "(no description)"
        } else {
            &self.description
        };
        write!(
            f,
            "{} [{}] {:.2}/{}",
            description,
            self.category,
            self.current_cost,
            self.frequency.as_str()
        )
    }
}

/// The editable fields of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Category,
    Description,
    CurrentCost,
    Frequency,
}

impl ExpenseField {
    /// Fields in grid column order
    pub const ALL: [ExpenseField; 4] = [
        Self::Category,
        Self::Description,
        Self::CurrentCost,
        Self::Frequency,
    ];

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Description => "Description",
            Self::CurrentCost => "Cost ($)",
            Self::Frequency => "Frequency",
        }
    }
}

/// A single-field change to an expense
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseUpdate {
    Category(String),
    Description(String),
    CurrentCost(f64),
    Frequency(Frequency),
}

impl ExpenseUpdate {
    /// Build an update from a field and its raw text value.
    ///
    /// Text that is not a number sets the cost to 0 and an unknown frequency
    /// label becomes monthly, so this never fails.
    pub fn from_input(field: ExpenseField, value: &str) -> Self {
        match field {
            ExpenseField::Category => Self::Category(value.to_string()),
            ExpenseField::Description => Self::Description(value.to_string()),
            ExpenseField::CurrentCost => Self::CurrentCost(parse_cost_lenient(value)),
            ExpenseField::Frequency => Self::Frequency(Frequency::from_label(value)),
        }
    }

    /// The field this update targets
    pub fn field(&self) -> ExpenseField {
        match self {
            Self::Category(_) => ExpenseField::Category,
            Self::Description(_) => ExpenseField::Description,
            Self::CurrentCost(_) => ExpenseField::CurrentCost,
            Self::Frequency(_) => ExpenseField::Frequency,
        }
    }
}

/// Parse a cost, treating anything unparseable (or NaN) as zero
pub fn parse_cost_lenient(value: &str) -> f64 {
    let value = value.trim();
    let value = value.strip_prefix('$').unwrap_or(value);
    match value.replace(',', "").parse::<f64>() {
        Ok(cost) if cost.is_finite() => cost,
        _ => 0.0,
    }
}

pub(crate) fn parse_cost_strict(value: &str) -> Result<f64, ExpenseParseError> {
    let trimmed = value.strip_prefix('$').unwrap_or(value);
    match trimmed.replace(',', "").parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(cost),
        _ => Err(ExpenseParseError::InvalidCost(value.to_string())),
    }
}

/// Errors from parsing expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseParseError {
    InvalidCost(String),
    TooManyFields(usize),
}

impl fmt::Display for ExpenseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCost(s) => write!(f, "Invalid cost: '{}'", s),
            Self::TooManyFields(n) => write!(
                f,
                "Expected at most 4 '|'-separated fields (Category|Description|Cost|frequency), got {}",
                n
            ),
        }
    }
}

impl std::error::Error for ExpenseParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_expense() {
        let expense = Expense::blank();
        assert!(expense.category.is_empty());
        assert!(expense.description.is_empty());
        assert_eq!(expense.current_cost, 0.0);
        assert_eq!(expense.frequency, Frequency::Monthly);
        assert!(!expense.is_eligible());
    }

    #[test]
    fn test_annual_cost() {
        let coffee = Expense::new("Food", "Daily coffee", 6.0, Frequency::Daily);
        assert_eq!(coffee.annual_cost(), 2190.0);
    }

    #[test]
    fn test_eligibility() {
        assert!(!Expense::new("Food", "", 5.0, Frequency::Daily).is_eligible());
        assert!(!Expense::new("", "Tea", 0.0, Frequency::Daily).is_eligible());
        assert!(Expense::new("", "Tea", 2.0, Frequency::Daily).is_eligible());
        // A lone space still counts as a description
        assert!(Expense::new("", " ", 2.0, Frequency::Daily).is_eligible());
    }

    #[test]
    fn test_apply_updates() {
        let mut expense = Expense::blank();
        let id = expense.id;
        expense.apply(ExpenseUpdate::Category("Fitness".into()));
        expense.apply(ExpenseUpdate::Description("Gym membership".into()));
        expense.apply(ExpenseUpdate::CurrentCost(60.0));
        expense.apply(ExpenseUpdate::Frequency(Frequency::Monthly));

        assert_eq!(expense.id, id);
        assert_eq!(expense.category, "Fitness");
        assert_eq!(expense.description, "Gym membership");
        assert_eq!(expense.current_cost, 60.0);
    }

    #[test]
    fn test_update_from_input_is_lenient() {
        assert_eq!(
            ExpenseUpdate::from_input(ExpenseField::CurrentCost, "abc"),
            ExpenseUpdate::CurrentCost(0.0)
        );
        assert_eq!(
            ExpenseUpdate::from_input(ExpenseField::CurrentCost, "$1,250.50"),
            ExpenseUpdate::CurrentCost(1250.5)
        );
        assert_eq!(
            ExpenseUpdate::from_input(ExpenseField::Frequency, "biweekly"),
            ExpenseUpdate::Frequency(Frequency::Monthly)
        );
    }

    #[test]
    fn test_update_targets_its_field() {
        let update = ExpenseUpdate::from_input(ExpenseField::CurrentCost, "12");
        assert_eq!(update, ExpenseUpdate::CurrentCost(12.0));
        assert_eq!(update.field(), ExpenseField::CurrentCost);
    }

    #[test]
    fn test_parse_spec() {
        let expense = Expense::parse_spec("Transport|Uber to work|25|daily").unwrap();
        assert_eq!(expense.category, "Transport");
        assert_eq!(expense.description, "Uber to work");
        assert_eq!(expense.current_cost, 25.0);
        assert_eq!(expense.frequency, Frequency::Daily);

        let partial = Expense::parse_spec("|Streaming services|45").unwrap();
        assert!(partial.category.is_empty());
        assert_eq!(partial.frequency, Frequency::Monthly);

        assert!(matches!(
            Expense::parse_spec("Food|Coffee|six|daily"),
            Err(ExpenseParseError::InvalidCost(_))
        ));
        assert!(matches!(
            Expense::parse_spec("a|b|1|daily|extra"),
            Err(ExpenseParseError::TooManyFields(5))
        ));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let expense: Expense =
            serde_json::from_str(r#"{"description": "Gym", "current_cost": 40}"#).unwrap();
        assert_eq!(expense.description, "Gym");
        assert_eq!(expense.current_cost, 40.0);
        assert_eq!(expense.frequency, Frequency::Monthly);
        assert!(expense.category.is_empty());
    }
}
