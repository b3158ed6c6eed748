//! Overtime entry models.
//!
//! This module contains [`OvertimeEntry`] and [`EntryLedger`], the caller-owned
//! collection of dated overtime hours that every calculation run reads from.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Overtime hours recorded against a single date.
///
/// # Example
///
/// ```
/// use overtime_engine::models::OvertimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = OvertimeEntry {
///     date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     hours: Decimal::new(25, 1), // 2.5 hours
/// };
/// assert!(entry.has_hours());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked beyond the standard shift.
    pub hours: Decimal,
}

impl OvertimeEntry {
    /// Returns true when this entry contributes a line item to a report.
    pub fn has_hours(&self) -> bool {
        self.hours > Decimal::ZERO
    }
}

/// An insertion-ordered collection of overtime entries keyed by date.
///
/// Recording hours for a date that is already present overwrites the stored
/// hours but keeps the entry in its original position, so the ledger is
/// idempotent per date key and reports list dates first-inserted-first.
///
/// # Example
///
/// ```
/// use overtime_engine::models::EntryLedger;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut ledger = EntryLedger::new();
/// let jan_3 = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// let jan_1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// ledger.record(jan_3, Decimal::from(2)).unwrap();
/// ledger.record(jan_1, Decimal::from(1)).unwrap();
/// ledger.record(jan_3, Decimal::from(4)).unwrap(); // overwrites, keeps position
///
/// let dates: Vec<_> = ledger.iter().map(|e| e.date).collect();
/// assert_eq!(dates, vec![jan_3, jan_1]);
/// assert_eq!(ledger.get(jan_3), Some(Decimal::from(4)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OvertimeEntry>", into = "Vec<OvertimeEntry>")]
pub struct EntryLedger {
    entries: Vec<OvertimeEntry>,
}

impl EntryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records hours for a date, overwriting any earlier value for that date.
    ///
    /// Returns the hours previously stored for the date, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] if `hours` is negative.
    pub fn record(&mut self, date: NaiveDate, hours: Decimal) -> PayrollResult<Option<Decimal>> {
        if hours < Decimal::ZERO {
            return Err(PayrollError::invalid(
                "hours",
                format!("overtime hours for {} must not be negative, got {}", date, hours),
            ));
        }

        match self.entries.iter_mut().find(|e| e.date == date) {
            Some(existing) => {
                let previous = existing.hours;
                existing.hours = hours;
                Ok(Some(previous))
            }
            None => {
                self.entries.push(OvertimeEntry { date, hours });
                Ok(None)
            }
        }
    }

    /// Returns the hours recorded for a date.
    pub fn get(&self, date: NaiveDate) -> Option<Decimal> {
        self.entries.iter().find(|e| e.date == date).map(|e| e.hours)
    }

    /// Removes the entry for a date, returning its hours.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Decimal> {
        let index = self.entries.iter().position(|e| e.date == date)?;
        Some(self.entries.remove(index).hours)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of dates in the ledger, including zero-hour dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger has no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if at least one date carries hours greater than zero.
    pub fn has_billable_hours(&self) -> bool {
        self.entries.iter().any(OvertimeEntry::has_hours)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OvertimeEntry> {
        self.entries.iter()
    }

    /// Returns the distinct calendar years covered by the ledger.
    pub fn years(&self) -> BTreeSet<i32> {
        self.entries.iter().map(|e| e.date.year()).collect()
    }
}

impl TryFrom<Vec<OvertimeEntry>> for EntryLedger {
    type Error = PayrollError;

    fn try_from(entries: Vec<OvertimeEntry>) -> PayrollResult<Self> {
        let mut ledger = EntryLedger::new();
        for entry in entries {
            ledger.record(entry.date, entry.hours)?;
        }
        Ok(ledger)
    }
}

impl From<EntryLedger> for Vec<OvertimeEntry> {
    fn from(ledger: EntryLedger) -> Self {
        ledger.entries
    }
}

impl<'a> IntoIterator for &'a EntryLedger {
    type Item = &'a OvertimeEntry;
    type IntoIter = std::slice::Iter<'a, OvertimeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
