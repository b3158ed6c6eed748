//! Premium-day classification.
//!
//! This module answers whether a date is paid at the premium overtime rate,
//! either directly against a [`HolidaySet`] with [`is_premium_day`] or through a
//! [`HolidayCalendar`] resolved for every year a calculation touches.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::models::{CalendarWarning, DayKind};

use super::provider::{HolidayProvider, HolidaySet};
use super::rest_days::RestDays;

/// Returns true if `date` is a rest day or a public holiday.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::{HolidaySet, RestDays, is_premium_day};
/// use chrono::NaiveDate;
///
/// let mut holidays = HolidaySet::new();
/// holidays.insert(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(), "Independence Day");
///
/// let rest_days = RestDays::sunday_only();
/// // Monday 2025-07-28 is a holiday
/// assert!(is_premium_day(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(), &holidays, &rest_days));
/// // Sunday 2025-07-27 is a rest day
/// assert!(is_premium_day(NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(), &holidays, &rest_days));
/// // Tuesday 2025-07-22 is neither
/// assert!(!is_premium_day(NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(), &holidays, &rest_days));
/// ```
pub fn is_premium_day(date: NaiveDate, holidays: &HolidaySet, rest_days: &RestDays) -> bool {
    rest_days.is_rest_day(date) || holidays.contains(date)
}

/// A holiday calendar resolved for a fixed set of years.
///
/// Each year is looked up from the provider exactly once. Years the provider
/// cannot supply are kept as degraded: their dates are classified by rest day
/// only and a [`CalendarWarning`] is recorded for the caller.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::{HolidayCalendar, PeruHolidays, RestDays};
/// use overtime_engine::models::DayKind;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::resolve(&PeruHolidays, RestDays::weekend(), [2025, 2150]);
///
/// let independence = NaiveDate::from_ymd_opt(2025, 7, 28).unwrap();
/// assert_eq!(calendar.classify(independence), DayKind::PublicHoliday);
///
/// // 2150 is outside the provider's range: degraded, with a warning.
/// assert_eq!(calendar.warnings().len(), 1);
/// let far_future_christmas = NaiveDate::from_ymd_opt(2150, 12, 25).unwrap();
/// assert_eq!(calendar.classify(far_future_christmas), DayKind::Ordinary);
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    rest_days: RestDays,
    years: BTreeMap<i32, Option<HolidaySet>>,
    warnings: Vec<CalendarWarning>,
}

impl HolidayCalendar {
    /// Looks up every year in `years` from `provider`.
    pub fn resolve(
        provider: &dyn HolidayProvider,
        rest_days: RestDays,
        years: impl IntoIterator<Item = i32>,
    ) -> Self {
        let mut resolved = BTreeMap::new();
        let mut warnings = Vec::new();

        for year in years {
            if resolved.contains_key(&year) {
                continue;
            }
            match provider.holidays_for_year(year) {
                Ok(set) => {
                    debug!(
                        provider = provider.name(),
                        year,
                        holidays = set.len(),
                        "Resolved holiday calendar"
                    );
                    resolved.insert(year, Some(set));
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        year,
                        error = %err,
                        "Holiday calendar unavailable, classifying by rest days only"
                    );
                    warnings.push(CalendarWarning {
                        year,
                        message: err.to_string(),
                    });
                    resolved.insert(year, None);
                }
            }
        }

        Self {
            rest_days,
            years: resolved,
            warnings,
        }
    }

    /// Classifies `date`.
    ///
    /// A date that is both a rest day and a holiday is reported as a holiday.
    /// Dates in years that were not resolved are checked against rest days only.
    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.holidays(date.year()).is_some_and(|set| set.contains(date)) {
            DayKind::PublicHoliday
        } else if self.rest_days.is_rest_day(date) {
            DayKind::RestDay
        } else {
            DayKind::Ordinary
        }
    }

    /// Returns true if overtime on `date` is paid at the premium rate.
    pub fn is_premium(&self, date: NaiveDate) -> bool {
        self.classify(date).is_premium()
    }

    /// Returns the resolved holiday set for `year`, if it is available.
    pub fn holidays(&self, year: i32) -> Option<&HolidaySet> {
        self.years.get(&year).and_then(Option::as_ref)
    }

    /// Returns the rest-day policy.
    pub fn rest_days(&self) -> RestDays {
        self.rest_days
    }

    /// Returns a warning for each year that could not be resolved.
    pub fn warnings(&self) -> &[CalendarWarning] {
        &self.warnings
    }
}
