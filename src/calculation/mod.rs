//! Calculation logic for the overtime engine.
//!
//! This module contains the hourly base rate derivation, tiered per-entry
//! overtime pricing, clock-based overtime derivation, report assembly, and the
//! [`PayrollCalculator`] that validates input and runs them in order.
//!
//! Every monetary amount is rounded to cents as soon as it is produced: the
//! hourly rate, then each entry's pay. The report total is the exact sum of
//! those rounded amounts.

mod calculator;
mod entry_pay;
mod hourly_rate;
mod report;
mod shift_times;

use rust_decimal::Decimal;

pub use calculator::{CalculationInput, PayrollCalculator};
pub use entry_pay::{RateTable, TIER_1_THRESHOLD_HOURS, compute_entry_pay, split_tiers};
pub use hourly_rate::{
    DEFAULT_AVG_WEEKS_PER_MONTH, DEFAULT_DAILY_HOURS, DEFAULT_WORK_DAYS_PER_WEEK, StandardHours,
    compute_hourly_rate,
};
pub use report::build_report;
pub use shift_times::{ShiftMode, ShiftTimes};

/// Rounds a monetary amount to 2 decimal places, midpoint to even.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("13.423").unwrap()), Decimal::from_str("13.42").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("2.165").unwrap()), Decimal::from_str("2.16").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
