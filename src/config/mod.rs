//! Configuration loading and management for the overtime engine.
//!
//! This module provides functionality to load deployment configuration from
//! YAML files: standard working hours, the overtime rate table, the rest-day
//! policy, the national holiday calendar and any extra holidays.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holiday country: {:?}", config.config().holiday_country);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ExtraHolidaysConfig, HolidayCountry, PayrollConfig};
