//! Per-entry overtime pay.
//!
//! Overtime on a premium day is paid at a single multiplier. Overtime on an
//! ordinary day is paid in two tiers:
//! - first 2 hours at the first-tier multiplier
//! - remaining hours at the second-tier multiplier
//!
//! Two rate tables are in use. The `surcharge` table (0.25 / 0.35) pays only
//! the overtime surcharge on ordinary days; the `full_rate` table
//! (1.25 / 1.35) pays base plus surcharge. Both use a 2.0 premium multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::round_currency;

/// The number of ordinary-day overtime hours paid at the first-tier multiplier.
pub const TIER_1_THRESHOLD_HOURS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Multipliers applied to the hourly rate for overtime.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::surcharge();
/// assert_eq!(table.first_tier_multiplier, Decimal::from_str("0.25").unwrap());
/// assert_eq!(table.premium_multiplier, Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Multiplier for ordinary-day hours up to the tier threshold.
    pub first_tier_multiplier: Decimal,
    /// Multiplier for ordinary-day hours beyond the tier threshold.
    pub second_tier_multiplier: Decimal,
    /// Multiplier for every hour on a rest day or public holiday.
    pub premium_multiplier: Decimal,
    /// Ordinary-day hours paid at the first-tier multiplier.
    #[serde(default = "default_tier_threshold")]
    pub tier_threshold_hours: Decimal,
}

fn default_tier_threshold() -> Decimal {
    TIER_1_THRESHOLD_HOURS
}

impl RateTable {
    /// Surcharge-only table: 25% / 35% on ordinary days, 200% on premium days.
    pub fn surcharge() -> Self {
        Self {
            first_tier_multiplier: Decimal::new(25, 2),
            second_tier_multiplier: Decimal::new(35, 2),
            premium_multiplier: Decimal::from(2),
            tier_threshold_hours: TIER_1_THRESHOLD_HOURS,
        }
    }

    /// Full-rate table: 125% / 135% on ordinary days, 200% on premium days.
    pub fn full_rate() -> Self {
        Self {
            first_tier_multiplier: Decimal::new(125, 2),
            second_tier_multiplier: Decimal::new(135, 2),
            premium_multiplier: Decimal::from(2),
            tier_threshold_hours: TIER_1_THRESHOLD_HOURS,
        }
    }

    /// Checks that no multiplier or threshold is negative.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        for (field, value) in [
            ("first_tier_multiplier", self.first_tier_multiplier),
            ("second_tier_multiplier", self.second_tier_multiplier),
            ("premium_multiplier", self.premium_multiplier),
            ("tier_threshold_hours", self.tier_threshold_hours),
        ] {
            if value < Decimal::ZERO {
                return Err(PayrollError::invalid(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::surcharge()
    }
}

/// Splits ordinary-day overtime hours into `(first_tier, second_tier)` hours.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{TIER_1_THRESHOLD_HOURS, split_tiers};
/// use rust_decimal::Decimal;
///
/// let (tier1, tier2) = split_tiers(Decimal::from(5), TIER_1_THRESHOLD_HOURS);
/// assert_eq!(tier1, Decimal::from(2));
/// assert_eq!(tier2, Decimal::from(3));
/// ```
pub fn split_tiers(hours: Decimal, threshold: Decimal) -> (Decimal, Decimal) {
    if hours <= threshold {
        (hours, Decimal::ZERO)
    } else {
        (threshold, hours - threshold)
    }
}

/// Computes the overtime pay for one entry.
///
/// - Premium day: `round(hours × rate × premium_multiplier, 2)`
/// - Ordinary day, hours within the threshold: `round(hours × rate × m1, 2)`
/// - Ordinary day, beyond the threshold:
///   `round(threshold × rate × m1 + (hours − threshold) × rate × m2, 2)`
///
/// The two tiers are summed before rounding.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] if `hours` or `hourly_rate` is
/// negative, or if the amount does not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{RateTable, compute_entry_pay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("8.66").unwrap();
/// let table = RateTable::surcharge();
///
/// // 2 × 8.66 × 0.25 + 3 × 8.66 × 0.35 = 13.423 → 13.42
/// let ordinary = compute_entry_pay(Decimal::from(5), rate, false, &table).unwrap();
/// assert_eq!(ordinary, Decimal::from_str("13.42").unwrap());
///
/// // 3 × 8.66 × 2 = 51.96
/// let premium = compute_entry_pay(Decimal::from(3), rate, true, &table).unwrap();
/// assert_eq!(premium, Decimal::from_str("51.96").unwrap());
/// ```
pub fn compute_entry_pay(
    hours: Decimal,
    hourly_rate: Decimal,
    is_premium_day: bool,
    table: &RateTable,
) -> PayrollResult<Decimal> {
    if hours < Decimal::ZERO {
        return Err(PayrollError::invalid(
            "hours",
            format!("must not be negative, got {}", hours),
        ));
    }
    if hourly_rate < Decimal::ZERO {
        return Err(PayrollError::invalid(
            "hourly_rate",
            format!("must not be negative, got {}", hourly_rate),
        ));
    }

    let out_of_range = || {
        PayrollError::invalid(
            "hours",
            format!(
                "amount out of range for {} hours at {} per hour",
                hours, hourly_rate
            ),
        )
    };

    let amount = if is_premium_day {
        hours
            .checked_mul(hourly_rate)
            .and_then(|v| v.checked_mul(table.premium_multiplier))
    } else {
        let (tier1_hours, tier2_hours) = split_tiers(hours, table.tier_threshold_hours);
        let tier1_amount = tier1_hours
            .checked_mul(hourly_rate)
            .and_then(|v| v.checked_mul(table.first_tier_multiplier));
        let tier2_amount = tier2_hours
            .checked_mul(hourly_rate)
            .and_then(|v| v.checked_mul(table.second_tier_multiplier));
        tier1_amount
            .zip(tier2_amount)
            .and_then(|(a, b)| a.checked_add(b))
    };

    amount.map(round_currency).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pay(hours: &str, premium: bool) -> Decimal {
        compute_entry_pay(dec(hours), dec("8.66"), premium, &RateTable::surcharge()).unwrap()
    }

    #[test]
    fn test_two_hours_ordinary_day() {
        // 2 × 8.66 × 0.25 = 4.33
        assert_eq!(pay("2", false), dec("4.33"));
    }

    #[test]
    fn test_five_hours_ordinary_day() {
        // 4.33 + 9.093 = 13.423 → 13.42
        assert_eq!(pay("5", false), dec("13.42"));
    }

    #[test]
    fn test_three_hours_premium_day() {
        // 3 × 8.66 × 2 = 51.96
        assert_eq!(pay("3", true), dec("51.96"));
    }

    #[test]
    fn test_one_hour_ordinary_day() {
        // 8.66 × 0.25 = 2.165 → 2.16 (midpoint to even)
        assert_eq!(pay("1", false), dec("2.16"));
    }

    #[test]
    fn test_zero_hours_pays_nothing() {
        assert_eq!(pay("0", false), Decimal::ZERO);
        assert_eq!(pay("0", true), Decimal::ZERO);
        let zero = compute_entry_pay(Decimal::ZERO, dec("123.45"), false, &RateTable::full_rate())
            .unwrap();
        assert_eq!(zero, Decimal::ZERO);
    }

    #[test]
    fn test_full_rate_table() {
        // 2 × 8.66 × 1.25 + 1 × 8.66 × 1.35 = 21.65 + 11.691 = 33.341 → 33.34
        let amount =
            compute_entry_pay(dec("3"), dec("8.66"), false, &RateTable::full_rate()).unwrap();
        assert_eq!(amount, dec("33.34"));
    }

    #[test]
    fn test_premium_is_double_ordinary_at_unit_rate() {
        let table = RateTable {
            first_tier_multiplier: Decimal::ONE,
            second_tier_multiplier: Decimal::ONE,
            premium_multiplier: Decimal::from(2),
            tier_threshold_hours: TIER_1_THRESHOLD_HOURS,
        };
        let rate = dec("8.66");
        let ordinary = compute_entry_pay(Decimal::ONE, rate, false, &table).unwrap();
        let premium = compute_entry_pay(Decimal::ONE, rate, true, &table).unwrap();
        assert_eq!(premium, ordinary * Decimal::from(2));
    }

    #[test]
    fn test_threshold_uses_first_tier_only() {
        let (tier1, tier2) = split_tiers(dec("2"), TIER_1_THRESHOLD_HOURS);
        assert_eq!(tier1, dec("2"));
        assert_eq!(tier2, Decimal::ZERO);
    }

    #[test]
    fn test_just_over_threshold_reaches_second_tier() {
        let (tier1, tier2) = split_tiers(dec("2.0001"), TIER_1_THRESHOLD_HOURS);
        assert_eq!(tier1, dec("2"));
        assert_eq!(tier2, dec("0.0001"));

        // Large rate so the fractional second tier is visible in cents:
        // 2 × 1000 × 0.25 + 0.0001 × 1000 × 0.35 = 500.035 → 500.04
        let amount =
            compute_entry_pay(dec("2.0001"), dec("1000"), false, &RateTable::surcharge()).unwrap();
        assert_eq!(amount, dec("500.04"));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let result = compute_entry_pay(dec("-1"), dec("8.66"), false, &RateTable::surcharge());
        assert!(matches!(result, Err(PayrollError::InvalidInput { .. })));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = compute_entry_pay(dec("1"), dec("-8.66"), true, &RateTable::surcharge());
        assert!(matches!(result, Err(PayrollError::InvalidInput { .. })));
    }

    #[test]
    fn test_rate_table_validate_rejects_negative_multiplier() {
        let table = RateTable {
            premium_multiplier: dec("-2"),
            ..RateTable::surcharge()
        };
        assert!(table.validate().is_err());
        assert!(RateTable::surcharge().validate().is_ok());
        assert!(RateTable::full_rate().validate().is_ok());
    }

    #[test]
    fn test_rate_table_deserializes_with_default_threshold() {
        let yaml = r#"
first_tier_multiplier: "1.25"
second_tier_multiplier: "1.35"
premium_multiplier: "2.0"
"#;
        let table: RateTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.tier_threshold_hours, dec("2"));
        assert_eq!(table.first_tier_multiplier, dec("1.25"));
    }

    #[test]
    fn test_amount_out_of_range_is_rejected() {
        let huge_hours = dec("10000000000000000000000000000");
        for premium in [true, false] {
            let result =
                compute_entry_pay(huge_hours, dec("8.66"), premium, &RateTable::surcharge());
            assert!(matches!(
                result,
                Err(PayrollError::InvalidInput { ref field, .. }) if field == "hours"
            ));
        }
    }

    #[test]
    fn test_large_amount_within_range_is_priced() {
        // 1e20 × 8.66 × 2 = 1.732e21
        let amount = compute_entry_pay(
            dec("100000000000000000000"),
            dec("8.66"),
            true,
            &RateTable::surcharge(),
        )
        .unwrap();
        assert_eq!(amount, dec("1732000000000000000000"));
    }
}
