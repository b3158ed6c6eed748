//! Payroll report assembly.

use rust_decimal::Decimal;

use crate::calendar::HolidayCalendar;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, DayKind, EntryLedger, PayLineItem, PayrollReport};

use super::entry_pay::{RateTable, compute_entry_pay, split_tiers};
use super::round_currency;

/// Prices every entry with hours and aggregates the results.
///
/// Entries with zero hours are skipped, not zero-priced. Line items keep the
/// ledger's insertion order. The report is all-or-nothing: on error no
/// partial report is produced.
///
/// `calendar` must have been resolved for the years the entries cover; dates
/// in other years are classified by rest day only.
///
/// # Errors
///
/// - [`PayrollError::MissingInput`] if `employee_name` is blank or
///   `hourly_rate` is `None`.
/// - [`PayrollError::InvalidInput`] if the rate is negative.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{RateTable, build_report};
/// use overtime_engine::calendar::{HolidayCalendar, NoHolidays, RestDays};
/// use overtime_engine::models::EntryLedger;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut entries = EntryLedger::new();
/// entries.record(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), Decimal::from(2)).unwrap(); // Monday
/// entries.record(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(), Decimal::from(3)).unwrap(); // Sunday
///
/// let calendar = HolidayCalendar::resolve(&NoHolidays, RestDays::sunday_only(), entries.years());
/// let report = build_report(
///     "Marco",
///     &entries,
///     Some(Decimal::from_str("8.66").unwrap()),
///     &calendar,
///     &RateTable::surcharge(),
/// )
/// .unwrap();
///
/// assert_eq!(report.line_items.len(), 2);
/// assert_eq!(report.total, Decimal::from_str("56.29").unwrap()); // 4.33 + 51.96
/// ```
pub fn build_report(
    employee_name: &str,
    entries: &EntryLedger,
    hourly_rate: Option<Decimal>,
    calendar: &HolidayCalendar,
    rate_table: &RateTable,
) -> PayrollResult<PayrollReport> {
    let employee_name = employee_name.trim();
    if employee_name.is_empty() {
        return Err(PayrollError::missing("employee_name"));
    }
    let hourly_rate = hourly_rate.ok_or_else(|| PayrollError::missing("hourly_rate"))?;

    let mut line_items = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    for entry in entries.iter().filter(|e| e.has_hours()) {
        let day_kind = calendar.classify(entry.date);
        let pay_amount =
            compute_entry_pay(entry.hours, hourly_rate, day_kind.is_premium(), rate_table)?;

        audit_steps.push(audit_entry(
            step_number,
            entry.date,
            entry.hours,
            hourly_rate,
            day_kind,
            pay_amount,
            rate_table,
        ));
        step_number += 1;

        line_items.push(PayLineItem {
            employee_name: employee_name.to_string(),
            date: entry.date,
            hours: entry.hours,
            pay_amount,
            day_kind,
        });
    }

    let total = line_items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.pay_amount))
        .map(round_currency)
        .ok_or_else(|| PayrollError::invalid("hours", "report total out of range"))?;

    let years = entries.years();
    let calendar_warnings = calendar
        .warnings()
        .iter()
        .filter(|w| years.contains(&w.year))
        .cloned()
        .collect();

    Ok(PayrollReport {
        employee_name: employee_name.to_string(),
        hourly_rate,
        line_items,
        total,
        calendar_warnings,
        audit_steps,
    })
}

fn audit_entry(
    step_number: u32,
    date: chrono::NaiveDate,
    hours: Decimal,
    hourly_rate: Decimal,
    day_kind: DayKind,
    amount: Decimal,
    table: &RateTable,
) -> AuditStep {
    let input = serde_json::json!({
        "date": date.to_string(),
        "hours": hours.normalize().to_string(),
        "hourly_rate": hourly_rate.to_string(),
        "day_kind": day_kind,
    });

    if day_kind.is_premium() {
        AuditStep {
            step_number,
            rule_id: "premium_overtime".to_string(),
            rule_name: "Premium Day Overtime".to_string(),
            input,
            output: serde_json::json!({
                "multiplier": table.premium_multiplier.normalize().to_string(),
                "amount": amount.to_string(),
            }),
            reasoning: format!(
                "{} is a {}: {} hours × ${} × {} = ${}",
                date,
                day_kind,
                hours.normalize(),
                hourly_rate,
                table.premium_multiplier.normalize(),
                amount
            ),
        }
    } else {
        let (tier1_hours, tier2_hours) = split_tiers(hours, table.tier_threshold_hours);
        let reasoning = if tier2_hours > Decimal::ZERO {
            format!(
                "Ordinary day: {} hours × ${} × {} + {} hours × ${} × {} = ${}",
                tier1_hours.normalize(),
                hourly_rate,
                table.first_tier_multiplier.normalize(),
                tier2_hours.normalize(),
                hourly_rate,
                table.second_tier_multiplier.normalize(),
                amount
            )
        } else {
            format!(
                "Ordinary day: {} hours × ${} × {} = ${}",
                tier1_hours.normalize(),
                hourly_rate,
                table.first_tier_multiplier.normalize(),
                amount
            )
        };

        AuditStep {
            step_number,
            rule_id: "ordinary_overtime".to_string(),
            rule_name: "Ordinary Day Tiered Overtime".to_string(),
            input,
            output: serde_json::json!({
                "tier_1_hours": tier1_hours.normalize().to_string(),
                "tier_1_multiplier": table.first_tier_multiplier.normalize().to_string(),
                "tier_2_hours": tier2_hours.normalize().to_string(),
                "tier_2_multiplier": table.second_tier_multiplier.normalize().to_string(),
                "amount": amount.to_string(),
            }),
            reasoning,
        }
    }
}
