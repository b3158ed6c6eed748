//! Overtime pay engine.
//!
//! This crate prices dated overtime entries for a salaried employee: it
//! derives an hourly rate from the monthly salary, classifies each date as an
//! ordinary working day, a rest day or a public holiday, applies the tiered
//! surcharge rules and produces an itemized report that can be exported as
//! CSV or JSON or served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
