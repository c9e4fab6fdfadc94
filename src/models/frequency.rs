//! Billing frequency and annualization
//!
//! Every expense is entered in its own unit ("$6 per day"). Annualizing maps
//! that amount onto a yearly total so expenses can be summed and compared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often an expense is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// All frequencies in display order
    pub const ALL: [Frequency; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    /// Number of billing periods in one year
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Self::Daily => 365.0,
            Self::Weekly => 52.0,
            Self::Monthly => 12.0,
            Self::Yearly => 1.0,
        }
    }

    /// Convert an amount in this frequency's unit to its yearly equivalent
    pub fn annualize(&self, cost: f64) -> f64 {
        match self {
            Self::Yearly => cost,
            _ => cost * self.periods_per_year(),
        }
    }

    /// Parse a frequency label, returning `None` for unknown labels
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Some(Self::Daily),
            "weekly" | "week" | "w" => Some(Self::Weekly),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            "yearly" | "year" | "annual" | "annually" | "y" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Parse a frequency label, treating anything unrecognized as monthly
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!(label = s, "unknown frequency label, treating as monthly");
            Self::Monthly
        })
    }

    /// Lowercase label used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// The next frequency in display order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Daily => Self::Weekly,
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Daily,
        }
    }
}

impl From<String> for Frequency {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<&str> for Frequency {
    fn from(s: &str) -> Self {
        Self::from_label(s)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Annualize `cost` paid at `frequency`.
///
/// Zero and negative costs scale like any other value.
pub fn annualize(cost: f64, frequency: Frequency) -> f64 {
    frequency.annualize(cost)
}

/// Annualize `cost` paid at a textual frequency label.
///
/// Unknown labels are treated as monthly rather than rejected.
pub fn annualize_label(cost: f64, label: &str) -> f64 {
    annualize(cost, Frequency::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annualize_each_frequency() {
        assert_eq!(annualize(10.0, Frequency::Daily), 3650.0);
        assert_eq!(annualize(10.0, Frequency::Weekly), 520.0);
        assert_eq!(annualize(10.0, Frequency::Monthly), 120.0);
        assert_eq!(annualize(10.0, Frequency::Yearly), 10.0);
    }

    #[test]
    fn test_yearly_is_identity() {
        for x in [0.0, 1.5, 1234.56, -42.0] {
            assert_eq!(annualize(x, Frequency::Yearly), x);
        }
    }

    #[test]
    fn test_zero_and_negative_costs() {
        assert_eq!(annualize(0.0, Frequency::Daily), 0.0);
        assert_eq!(annualize(-2.0, Frequency::Weekly), -104.0);
    }

    #[test]
    fn test_unknown_label_is_monthly() {
        assert_eq!(annualize_label(10.0, "fortnightly"), 120.0);
        assert_eq!(annualize_label(10.0, ""), 120.0);
        assert_eq!(annualize_label(10.0, "DAILY"), 3650.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse(" Yearly "), Some(Frequency::Yearly));
        assert_eq!(Frequency::parse("annual"), Some(Frequency::Yearly));
        assert_eq!(Frequency::parse("hourly"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut freq = Frequency::Daily;
        for expected in Frequency::ALL.iter().cycle().skip(1).take(4) {
            freq = freq.next();
            assert_eq!(freq, *expected);
        }
    }

    #[test]
    fn test_serde_lowercase_and_lenient() {
        assert_eq!(serde_json::to_string(&Frequency::Daily).unwrap(), "\"daily\"");
        let parsed: Frequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, Frequency::Weekly);
        let fallback: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(fallback, Frequency::Monthly);
    }
}
