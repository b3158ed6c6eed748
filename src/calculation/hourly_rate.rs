//! Hourly base rate derivation.
//!
//! This module provides the [`StandardHours`] assumptions and
//! [`compute_hourly_rate`], which converts a monthly salary into the hourly
//! rate every overtime amount is priced from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::round_currency;

/// Standard daily hours assumed by default (one 8-hour shift).
pub const DEFAULT_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Standard working days per week assumed by default.
pub const DEFAULT_WORK_DAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Average weeks per month (4.33) assumed by default.
pub const DEFAULT_AVG_WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// The standard working time a monthly salary pays for.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::StandardHours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = StandardHours::default();
/// assert_eq!(hours.monthly_hours(), Decimal::from_str("173.2").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardHours {
    /// Hours in a standard shift.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: Decimal,
    /// Working days in a standard week.
    #[serde(default = "default_work_days_per_week")]
    pub work_days_per_week: Decimal,
    /// Average number of weeks in a month.
    #[serde(default = "default_avg_weeks_per_month")]
    pub avg_weeks_per_month: Decimal,
}

fn default_daily_hours() -> Decimal {
    DEFAULT_DAILY_HOURS
}

fn default_work_days_per_week() -> Decimal {
    DEFAULT_WORK_DAYS_PER_WEEK
}

fn default_avg_weeks_per_month() -> Decimal {
    DEFAULT_AVG_WEEKS_PER_MONTH
}

impl Default for StandardHours {
    fn default() -> Self {
        Self {
            daily_hours: DEFAULT_DAILY_HOURS,
            work_days_per_week: DEFAULT_WORK_DAYS_PER_WEEK,
            avg_weeks_per_month: DEFAULT_AVG_WEEKS_PER_MONTH,
        }
    }
}

impl StandardHours {
    /// Returns the number of hours a monthly salary covers.
    pub fn monthly_hours(&self) -> Decimal {
        self.daily_hours * self.work_days_per_week * self.avg_weeks_per_month
    }

    /// Checks that every component is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        for (field, value) in [
            ("daily_hours", self.daily_hours),
            ("work_days_per_week", self.work_days_per_week),
            ("avg_weeks_per_month", self.avg_weeks_per_month),
        ] {
            if value <= Decimal::ZERO {
                return Err(PayrollError::invalid(
                    field,
                    format!("must be greater than zero, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Computes the hourly base rate for a monthly salary.
///
/// `rate = round(monthly_salary / (daily_hours × work_days_per_week × avg_weeks_per_month), 2)`
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] if the salary is negative, any
/// standard-hours component is not strictly positive, or the rate does not
/// fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{StandardHours, compute_hourly_rate};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = compute_hourly_rate(Decimal::from(1500), &StandardHours::default()).unwrap();
/// assert_eq!(rate, Decimal::from_str("8.66").unwrap());
/// ```
pub fn compute_hourly_rate(monthly_salary: Decimal, hours: &StandardHours) -> PayrollResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(PayrollError::invalid(
            "monthly_salary",
            format!("must not be negative, got {}", monthly_salary),
        ));
    }
    hours.validate()?;

    hours
        .daily_hours
        .checked_mul(hours.work_days_per_week)
        .and_then(|v| v.checked_mul(hours.avg_weeks_per_month))
        .and_then(|monthly_hours| monthly_salary.checked_div(monthly_hours))
        .map(round_currency)
        .ok_or_else(|| PayrollError::invalid("monthly_salary", "hourly rate out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_monthly_hours() {
        assert_eq!(StandardHours::default().monthly_hours(), dec("173.2"));
    }

    #[test]
    fn test_hourly_rate_for_1500() {
        // 1500 / 173.2 = 8.6605... → 8.66
        let rate = compute_hourly_rate(dec("1500"), &StandardHours::default()).unwrap();
        assert_eq!(rate, dec("8.66"));
    }

    #[test]
    fn test_hourly_rate_for_zero_salary() {
        let rate = compute_hourly_rate(Decimal::ZERO, &StandardHours::default()).unwrap();
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_hourly_rate_rounds_to_cents() {
        // 2500 / 173.2 = 14.4341... → 14.43
        let rate = compute_hourly_rate(dec("2500"), &StandardHours::default()).unwrap();
        assert_eq!(rate, dec("14.43"));
        assert!(rate.scale() <= 2);
    }

    #[test]
    fn test_custom_standard_hours() {
        let hours = StandardHours {
            daily_hours: dec("10"),
            work_days_per_week: dec("4"),
            avg_weeks_per_month: dec("4"),
        };
        let rate = compute_hourly_rate(dec("1600"), &hours).unwrap();
        assert_eq!(rate, dec("10"));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let result = compute_hourly_rate(dec("-1"), &StandardHours::default());
        assert!(matches!(
            result,
            Err(PayrollError::InvalidInput { ref field, .. }) if field == "monthly_salary"
        ));
    }

    #[test]
    fn test_non_positive_divisor_rejected() {
        let hours = StandardHours {
            work_days_per_week: Decimal::ZERO,
            ..StandardHours::default()
        };
        let result = compute_hourly_rate(dec("1500"), &hours);
        assert!(matches!(
            result,
            Err(PayrollError::InvalidInput { ref field, .. }) if field == "work_days_per_week"
        ));
    }

    #[test]
    fn test_standard_hours_deserialize_with_defaults() {
        let hours: StandardHours = serde_yaml::from_str("daily_hours: \"6\"").unwrap();
        assert_eq!(hours.daily_hours, dec("6"));
        assert_eq!(hours.work_days_per_week, dec("5"));
        assert_eq!(hours.avg_weeks_per_month, dec("4.33"));
    }

    proptest! {
        #[test]
        fn prop_hourly_rate_monotonic_in_salary(a in 0u32..10_000_000, b in 0u32..10_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let hours = StandardHours::default();
            let low_rate = compute_hourly_rate(Decimal::new(low as i64, 2), &hours).unwrap();
            let high_rate = compute_hourly_rate(Decimal::new(high as i64, 2), &hours).unwrap();
            prop_assert!(low_rate <= high_rate);
        }
    }
}
