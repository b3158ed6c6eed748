//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and the structures that
//! make it up: line items, degraded-calendar warnings and the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a date was classified for pay-rate purposes.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayKind;
///
/// assert!(DayKind::PublicHoliday.is_premium());
/// assert!(DayKind::RestDay.is_premium());
/// assert!(!DayKind::Ordinary.is_premium());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A regular working day, paid at the tiered ordinary rates.
    Ordinary,
    /// A weekday listed in the rest-day policy.
    RestDay,
    /// A date in the public-holiday set.
    PublicHoliday,
}

impl DayKind {
    /// Returns true when overtime on this day is paid at the premium rate.
    pub fn is_premium(&self) -> bool {
        !matches!(self, DayKind::Ordinary)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Ordinary => write!(f, "ordinary"),
            DayKind::RestDay => write!(f, "rest day"),
            DayKind::PublicHoliday => write!(f, "public holiday"),
        }
    }
}

/// A single priced overtime entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLineItem {
    /// The employee the overtime belongs to.
    pub employee_name: String,
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// The overtime hours on that date.
    pub hours: Decimal,
    /// The overtime pay, rounded to 2 decimal places.
    pub pay_amount: Decimal,
    /// How the date was classified.
    pub day_kind: DayKind,
}

/// Signals that a year was classified without its public holidays.
///
/// Dates in `year` were priced as premium only when they fell on a rest day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWarning {
    /// The year whose holidays could not be loaded.
    pub year: i32,
    /// Why the holiday lookup failed.
    pub message: String,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The aggregated overtime pay for one employee.
///
/// Reports are derived in full on each calculation run and are never updated
/// incrementally. Running the same inputs twice yields an equal report.
///
/// # Example
///
/// ```
/// use overtime_engine::models::PayrollReport;
/// use rust_decimal::Decimal;
///
/// let report = PayrollReport {
///     employee_name: "Marco".to_string(),
///     hourly_rate: Decimal::new(866, 2),
///     line_items: vec![],
///     total: Decimal::ZERO,
///     calendar_warnings: vec![],
///     audit_steps: vec![],
/// };
/// assert!(report.is_empty());
/// assert!(!report.is_degraded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The employee the report is for.
    pub employee_name: String,
    /// The hourly base rate the line items were priced with.
    pub hourly_rate: Decimal,
    /// Priced entries, in the order the entries were supplied.
    pub line_items: Vec<PayLineItem>,
    /// Sum of all line item amounts.
    pub total: Decimal,
    /// Years that were classified without public holidays.
    #[serde(default)]
    pub calendar_warnings: Vec<CalendarWarning>,
    /// The calculation decisions, in order.
    #[serde(default)]
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollReport {
    /// Returns true if no entry produced a line item.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Returns true if any year was classified in degraded mode.
    pub fn is_degraded(&self) -> bool {
        !self.calendar_warnings.is_empty()
    }

    /// Returns the sum of overtime hours across all line items, or `None` if
    /// it does not fit in a [`Decimal`].
    pub fn total_hours(&self) -> Option<Decimal> {
        self.line_items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(date: &str, hours: &str, amount: &str, day_kind: DayKind) -> PayLineItem {
        PayLineItem {
            employee_name: "Marco".to_string(),
            date: NaiveDate::from_str(date).unwrap(),
            hours: dec(hours),
            pay_amount: dec(amount),
            day_kind,
        }
    }

    #[test]
    fn test_total_hours_sums_line_items() {
        let report = PayrollReport {
            employee_name: "Marco".to_string(),
            hourly_rate: dec("8.66"),
            line_items: vec![
                line("2025-01-06", "2", "4.33", DayKind::Ordinary),
                line("2025-01-05", "3", "51.96", DayKind::RestDay),
            ],
            total: dec("56.29"),
            calendar_warnings: vec![],
            audit_steps: vec![],
        };
        assert_eq!(report.total_hours(), Some(dec("5")));
        assert!(!report.is_empty());
    }

    #[test]
    fn test_total_hours_out_of_range() {
        let report = PayrollReport {
            employee_name: "Marco".to_string(),
            hourly_rate: dec("0.01"),
            line_items: vec![
                line("2025-01-05", "50000000000000000000000000000", "1000000000000000000000000000", DayKind::RestDay),
                line("2025-01-12", "50000000000000000000000000000", "1000000000000000000000000000", DayKind::RestDay),
            ],
            total: dec("2000000000000000000000000000"),
            calendar_warnings: vec![],
            audit_steps: vec![],
        };
        assert_eq!(report.total_hours(), None);
    }

    #[test]
    fn test_degraded_when_warnings_present() {
        let report = PayrollReport {
            employee_name: "Marco".to_string(),
            hourly_rate: dec("8.66"),
            line_items: vec![],
            total: Decimal::ZERO,
            calendar_warnings: vec![CalendarWarning {
                year: 2150,
                message: "outside supported range".to_string(),
            }],
            audit_steps: vec![],
        };
        assert!(report.is_degraded());
    }

    #[test]
    fn test_day_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DayKind::PublicHoliday).unwrap();
        assert_eq!(json, "\"public_holiday\"");
        let json = serde_json::to_string(&DayKind::RestDay).unwrap();
        assert_eq!(json, "\"rest_day\"");
    }

    #[test]
    fn test_line_item_serializes_amount_as_string() {
        let item = line("2025-01-06", "2", "4.33", DayKind::Ordinary);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["pay_amount"], "4.33");
        assert_eq!(json["date"], "2025-01-06");
    }
}
