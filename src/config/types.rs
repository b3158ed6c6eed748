//! Configuration types for overtime calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{RateTable, ShiftMode, StandardHours};
use crate::calendar::{
    HolidayProvider, LayeredHolidays, NoHolidays, PeruHolidays, PublicHoliday, RestDays,
    StaticHolidays,
};
use crate::error::PayrollResult;

/// The national holiday calendar a deployment observes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCountry {
    /// Peru national public holidays.
    #[default]
    Peru,
    /// No national holidays; only rest days and extra holidays are premium.
    None,
}

/// Extra holidays file structure (`holidays/<name>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraHolidaysConfig {
    /// Holidays observed in addition to the national calendar.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete deployment configuration.
///
/// Every field has a default, so an empty `payroll.yaml` yields the canonical
/// configuration: 8h × 5 days × 4.33 weeks, the surcharge rate table,
/// Saturday and Sunday as rest days, Peru holidays, fixed-hours input.
///
/// # Example
///
/// ```
/// use overtime_engine::config::{HolidayCountry, PayrollConfig};
/// use overtime_engine::calculation::{RateTable, ShiftMode};
/// use overtime_engine::calendar::RestDays;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.rate_table, RateTable::surcharge());
/// assert_eq!(config.rest_days, RestDays::weekend());
/// assert_eq!(config.holiday_country, HolidayCountry::Peru);
/// assert_eq!(config.shift_mode, ShiftMode::Fixed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The standard working time a monthly salary covers.
    #[serde(default)]
    pub standard_hours: StandardHours,
    /// Overtime multipliers.
    #[serde(default)]
    pub rate_table: RateTable,
    /// Weekdays paid at the premium rate.
    #[serde(default)]
    pub rest_days: RestDays,
    /// The national holiday calendar.
    #[serde(default)]
    pub holiday_country: HolidayCountry,
    /// How callers supply overtime hours.
    #[serde(default)]
    pub shift_mode: ShiftMode,
    /// Holidays observed in addition to the national calendar.
    #[serde(default)]
    pub extra_holidays: Vec<PublicHoliday>,
}

impl PayrollConfig {
    /// Checks the standard hours and rate table.
    pub fn validate(&self) -> PayrollResult<()> {
        self.standard_hours.validate()?;
        self.rate_table.validate()
    }

    /// Builds the holiday source this configuration describes.
    pub fn holiday_provider(&self) -> Box<dyn HolidayProvider> {
        let primary: Box<dyn HolidayProvider> = match self.holiday_country {
            HolidayCountry::Peru => Box::new(PeruHolidays),
            HolidayCountry::None => Box::new(NoHolidays),
        };

        if self.extra_holidays.is_empty() {
            primary
        } else {
            let extra = StaticHolidays::new("extra", self.extra_holidays.iter().cloned());
            Box::new(LayeredHolidays::new(primary, extra))
        }
    }
}
