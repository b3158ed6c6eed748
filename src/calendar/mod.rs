//! Calendar classification for premium overtime rates.
//!
//! This module decides whether a date is a premium day: a weekday covered by
//! the configured rest-day policy, or a public holiday supplied by a
//! [`HolidayProvider`].

mod holiday_calendar;
mod peru;
mod provider;
mod rest_days;

pub use holiday_calendar::{HolidayCalendar, is_premium_day};
pub use peru::{PERU_FIRST_SUPPORTED_YEAR, PERU_LAST_SUPPORTED_YEAR, PeruHolidays, easter_sunday};
pub use provider::{
    HolidayProvider, HolidaySet, LayeredHolidays, NoHolidays, PublicHoliday, StaticHolidays,
};
pub use rest_days::RestDays;
