//! Core data models for the overtime engine.
//!
//! This module contains the entry collection consumed by calculations and the
//! report types they produce.

mod entry;
mod report;

pub use entry::{EntryLedger, OvertimeEntry};
pub use report::{AuditStep, CalendarWarning, DayKind, PayLineItem, PayrollReport};
