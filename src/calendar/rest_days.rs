//! Rest-day policy.
//!
//! Deployments disagree on which weekdays count as rest days (Sunday only, or
//! Saturday and Sunday), so the policy is configuration rather than a constant.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The set of weekdays on which overtime is paid at the premium rate.
///
/// Deserializes from a list of weekday names, e.g. `["saturday", "sunday"]`.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::RestDays;
/// use chrono::{NaiveDate, Weekday};
///
/// let weekend = RestDays::weekend();
/// assert!(weekend.contains(Weekday::Sat));
///
/// let sunday_only = RestDays::sunday_only();
/// // 2025-01-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
/// assert!(weekend.is_rest_day(saturday));
/// assert!(!sunday_only.is_rest_day(saturday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct RestDays {
    mask: u8,
}

impl RestDays {
    /// A policy with no rest days.
    pub fn none() -> Self {
        Self { mask: 0 }
    }

    /// Sunday is the only rest day.
    pub fn sunday_only() -> Self {
        Self::from_days([Weekday::Sun])
    }

    /// Saturday and Sunday are rest days.
    pub fn weekend() -> Self {
        Self::from_days([Weekday::Sat, Weekday::Sun])
    }

    /// Builds a policy from any collection of weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, day| mask | Self::bit(day));
        Self { mask }
    }

    /// Returns true if `day` is a rest day under this policy.
    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & Self::bit(day) != 0
    }

    /// Returns true if `date` falls on a rest day.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Returns the rest days in Monday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        (0..7u8)
            .filter_map(|n| Weekday::try_from(n).ok())
            .filter(|day| self.contains(*day))
            .collect()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }
}

impl Default for RestDays {
    fn default() -> Self {
        Self::weekend()
    }
}

impl From<Vec<Weekday>> for RestDays {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from_days(days)
    }
}

impl From<RestDays> for Vec<Weekday> {
    fn from(rest_days: RestDays) -> Self {
        rest_days.days()
    }
}
