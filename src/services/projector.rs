//! Growth projection
//!
//! Projects the future value of investing the annual savings in equal monthly
//! contributions, compounded monthly at a fixed annual rate.

use serde::{Deserialize, Serialize};

/// Result of a growth projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Value of all contributions plus growth at the end of the horizon
    pub future_value: f64,
    /// Sum of the contributions alone
    pub total_contributions: f64,
    /// `future_value - total_contributions`
    pub investment_gains: f64,
}

/// Future value of an ordinary annuity paid monthly.
///
/// Contributions land at the end of each month. A zero rate degenerates to
/// the plain sum of contributions.
pub fn future_value_monthly(annual_contribution: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = f64::from(years) * 12.0;
    let monthly_contribution = annual_contribution / 12.0;

    if monthly_rate == 0.0 {
        return monthly_contribution * months;
    }

    monthly_contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
}

/// Project the growth of `annual_contribution` invested over `years`.
///
/// Preconditions: `annual_rate_percent >= 0`. The value is not clamped here;
/// callers bound it (the interactive controls keep it within 0-15%).
pub fn project(annual_contribution: f64, annual_rate_percent: f64, years: u32) -> Projection {
    let future_value = future_value_monthly(annual_contribution, annual_rate_percent, years);
    let total_contributions = annual_contribution * f64::from(years);

    Projection {
        future_value,
        total_contributions,
        investment_gains: future_value - total_contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{} != {} (±{})", a, b, tolerance);
    }

    #[test]
    fn test_zero_rate() {
        let p = project(1200.0, 0.0, 5);
        assert_close(p.future_value, 6000.0, 1e-9);
        assert_close(p.total_contributions, 6000.0, 1e-9);
        assert_close(p.investment_gains, 0.0, 1e-9);
    }

    #[test]
    fn test_seven_percent_ten_years() {
        let p = project(1200.0, 7.0, 10);
        assert_close(p.future_value, 17308.48, 0.1);
        assert_close(p.total_contributions, 12000.0, 1e-9);
        assert_close(p.investment_gains, 5308.48, 0.1);
    }

    #[test]
    fn test_zero_years() {
        let p = project(1200.0, 7.0, 0);
        assert_eq!(p.future_value, 0.0);
        assert_eq!(p.total_contributions, 0.0);
        assert_eq!(p.investment_gains, 0.0);
    }

    #[test]
    fn test_zero_contribution() {
        let p = project(0.0, 12.0, 30);
        assert_eq!(p.future_value, 0.0);
        assert_eq!(p.investment_gains, 0.0);
    }

    #[test]
    fn test_one_month_equivalent() {
        // One year at 12%: 100/month at 1%/month
        let fv = future_value_monthly(1200.0, 12.0, 1);
        let expected = 100.0 * (1.01f64.powi(12) - 1.0) / 0.01;
        assert_close(fv, expected, 1e-9);
    }

    #[test]
    fn test_gains_grow_with_rate() {
        let low = project(5000.0, 3.0, 20);
        let high = project(5000.0, 10.0, 20);
        assert!(high.future_value > low.future_value);
        assert_eq!(low.total_contributions, high.total_contributions);
    }
}
