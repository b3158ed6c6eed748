//! Request types for the overtime engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and their conversion into a validated [`CalculationInput`].

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{CalculationInput, PayrollCalculator, ShiftTimes};
use crate::error::{PayrollError, PayrollResult};
use crate::models::EntryLedger;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the overtime belongs to.
    #[serde(default)]
    pub employee_name: String,
    /// Monthly salary.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Dated overtime, in the order it was recorded.
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
}

/// One dated overtime entry in a calculation request.
///
/// Supply either `hours` or, for clock-mode deployments, both `start` and
/// `end`. An entry with neither is treated as zero hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Overtime hours.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Shift start time.
    #[serde(default)]
    pub start: Option<NaiveTime>,
    /// Shift end time; not after `start` means the next day.
    #[serde(default)]
    pub end: Option<NaiveTime>,
}

impl EntryRequest {
    fn overtime_hours(&self, calculator: &PayrollCalculator) -> PayrollResult<Decimal> {
        match (self.hours, self.start, self.end) {
            (Some(hours), None, None) => Ok(hours),
            (None, Some(start), Some(end)) => {
                calculator.shift_overtime_hours(&ShiftTimes { start, end })
            }
            (None, None, None) => Ok(Decimal::ZERO),
            (Some(_), _, _) => Err(PayrollError::invalid(
                "entries",
                format!("entry for {} has both hours and shift times", self.date),
            )),
            (None, _, _) => Err(PayrollError::invalid(
                "entries",
                format!("entry for {} needs both start and end times", self.date),
            )),
        }
    }
}

impl CalculationRequest {
    /// Converts the request into calculation input.
    ///
    /// Entries are recorded in request order; a repeated date overwrites the
    /// earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] for negative hours, incomplete
    /// or conflicting shift times, or shift times outside clock mode.
    pub fn into_input(self, calculator: &PayrollCalculator) -> PayrollResult<CalculationInput> {
        let mut ledger = EntryLedger::new();
        for entry in &self.entries {
            let hours = entry.overtime_hours(calculator)?;
            ledger.record(entry.date, hours)?;
        }

        Ok(CalculationInput {
            employee_name: self.employee_name,
            monthly_salary: self.monthly_salary,
            entries: ledger,
        })
    }
}
