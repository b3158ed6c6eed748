//! Boundary-validated overtime calculation.
//!
//! [`PayrollCalculator`] ties the configured standard hours, rate table,
//! rest-day policy and holiday source together. It validates caller input
//! before any computation runs, then derives the hourly rate and builds the
//! report in one pass.

use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::{HolidayCalendar, HolidayProvider};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EntryLedger, PayrollReport};

use super::hourly_rate::compute_hourly_rate;
use super::report::build_report;
use super::shift_times::{ShiftMode, ShiftTimes};

/// Everything a caller supplies for one calculation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The employee the overtime belongs to.
    pub employee_name: String,
    /// Monthly salary; `None` when the caller has not supplied one.
    pub monthly_salary: Option<Decimal>,
    /// The dated overtime hours to price.
    pub entries: EntryLedger,
}

/// Computes payroll reports for a single deployment configuration.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{CalculationInput, PayrollCalculator};
/// use overtime_engine::config::PayrollConfig;
/// use overtime_engine::models::EntryLedger;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = PayrollCalculator::new(PayrollConfig::default());
///
/// let mut entries = EntryLedger::new();
/// // Wednesday 2025-03-12, an ordinary working day
/// entries.record(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(), Decimal::from(2)).unwrap();
///
/// let report = calculator
///     .calculate(&CalculationInput {
///         employee_name: "Marco".to_string(),
///         monthly_salary: Some(Decimal::from(1500)),
///         entries,
///     })
///     .unwrap();
///
/// assert_eq!(report.hourly_rate, Decimal::from_str("8.66").unwrap());
/// assert_eq!(report.total, Decimal::from_str("4.33").unwrap());
/// ```
#[derive(Debug)]
pub struct PayrollCalculator {
    config: PayrollConfig,
    provider: Box<dyn HolidayProvider>,
}

impl PayrollCalculator {
    /// Creates a calculator using the holiday source named in `config`.
    pub fn new(config: PayrollConfig) -> Self {
        let provider = config.holiday_provider();
        Self { config, provider }
    }

    /// Creates a calculator with an explicitly injected holiday source.
    pub fn with_provider(config: PayrollConfig, provider: Box<dyn HolidayProvider>) -> Self {
        Self { config, provider }
    }

    /// Returns the deployment configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the holiday source.
    pub fn provider(&self) -> &dyn HolidayProvider {
        self.provider.as_ref()
    }

    /// Derives the hourly base rate for `monthly_salary`.
    pub fn hourly_rate(&self, monthly_salary: Decimal) -> PayrollResult<Decimal> {
        compute_hourly_rate(monthly_salary, &self.config.standard_hours)
    }

    /// Converts clock times into overtime hours.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] unless the deployment runs in
    /// [`ShiftMode::Clock`].
    pub fn shift_overtime_hours(&self, shift: &ShiftTimes) -> PayrollResult<Decimal> {
        match self.config.shift_mode {
            ShiftMode::Clock => Ok(shift.overtime_hours(self.config.standard_hours.daily_hours)),
            ShiftMode::Fixed => Err(PayrollError::invalid(
                "shift",
                "shift start/end times are only accepted in clock mode",
            )),
        }
    }

    /// Validates `input` and computes its payroll report.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::MissingInput`] for a blank name, an absent or zero
    ///   salary, or no entry with hours greater than zero.
    /// - [`PayrollError::InvalidInput`] for a negative salary, an invalid
    ///   configuration, or amounts too large to represent.
    pub fn calculate(&self, input: &CalculationInput) -> PayrollResult<PayrollReport> {
        let start_time = Instant::now();

        if input.employee_name.trim().is_empty() {
            return Err(PayrollError::missing("employee_name"));
        }
        let monthly_salary = match input.monthly_salary {
            Some(salary) if salary < Decimal::ZERO => {
                return Err(PayrollError::invalid(
                    "monthly_salary",
                    format!("must not be negative, got {}", salary),
                ));
            }
            Some(salary) if !salary.is_zero() => salary,
            _ => return Err(PayrollError::missing("monthly_salary")),
        };
        if !input.entries.has_billable_hours() {
            return Err(PayrollError::missing("entries"));
        }
        self.config.rate_table.validate()?;

        let hourly_rate = self.hourly_rate(monthly_salary)?;
        debug!(
            employee = %input.employee_name.trim(),
            monthly_salary = %monthly_salary,
            hourly_rate = %hourly_rate,
            "Derived hourly rate"
        );

        let calendar = HolidayCalendar::resolve(
            self.provider.as_ref(),
            self.config.rest_days,
            input.entries.years(),
        );

        let report = build_report(
            &input.employee_name,
            &input.entries,
            Some(hourly_rate),
            &calendar,
            &self.config.rate_table,
        )?;

        info!(
            employee = %report.employee_name,
            entries_count = report.line_items.len(),
            total = %report.total,
            degraded = report.is_degraded(),
            duration_us = start_time.elapsed().as_micros(),
            "Overtime report calculated"
        );

        Ok(report)
    }
}
