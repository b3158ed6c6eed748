//! Peru national holiday calendar.

use chrono::{Duration, NaiveDate};

use crate::error::{PayrollError, PayrollResult};

use super::provider::{HolidayProvider, HolidaySet};

/// First year the computed rules are known to hold.
pub const PERU_FIRST_SUPPORTED_YEAR: i32 = 1900;
/// Last year the computed rules are known to hold.
pub const PERU_LAST_SUPPORTED_YEAR: i32 = 2099;

/// Peru national public holidays.
///
/// The following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Maundy Thursday (Easter - 3)
/// * Good Friday (Easter - 2)
/// * Easter Sunday
/// * Labour Day (May 1)
/// * Battle of Arica and Flag Day (Jun 7, since 2022)
/// * Saint Peter and Saint Paul (Jun 29)
/// * Peruvian Air Force Day (Jul 23, since 2024)
/// * Independence Day (Jul 28 and Jul 29)
/// * Battle of Junín (Aug 6, since 2022)
/// * Santa Rosa de Lima (Aug 30)
/// * Battle of Angamos (Oct 8)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Battle of Ayacucho (Dec 9, since 2022)
/// * Christmas Day (Dec 25)
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::{HolidayProvider, PeruHolidays};
/// use chrono::NaiveDate;
///
/// let holidays = PeruHolidays.holidays_for_year(2025).unwrap();
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap()));
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap())); // Good Friday
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PeruHolidays;

impl HolidayProvider for PeruHolidays {
    fn name(&self) -> &str {
        "Peru"
    }

    fn holidays_for_year(&self, year: i32) -> PayrollResult<HolidaySet> {
        if !(PERU_FIRST_SUPPORTED_YEAR..=PERU_LAST_SUPPORTED_YEAR).contains(&year) {
            return Err(PayrollError::CalendarLookupFailure {
                year,
                message: format!(
                    "Peru holidays are only available for {}-{}",
                    PERU_FIRST_SUPPORTED_YEAR, PERU_LAST_SUPPORTED_YEAR
                ),
            });
        }

        let mut set = HolidaySet::new();
        let mut fixed = |month: u32, day: u32, name: &str| {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                set.insert(date, name);
            }
        };

        fixed(1, 1, "New Year's Day");
        fixed(5, 1, "Labour Day");
        if year >= 2022 {
            fixed(6, 7, "Battle of Arica and Flag Day");
        }
        fixed(6, 29, "Saint Peter and Saint Paul's Day");
        if year >= 2024 {
            fixed(7, 23, "Peruvian Air Force Day");
        }
        fixed(7, 28, "Independence Day");
        fixed(7, 29, "Independence Day");
        if year >= 2022 {
            fixed(8, 6, "Battle of Junín");
        }
        fixed(8, 30, "Santa Rosa de Lima");
        fixed(10, 8, "Battle of Angamos");
        fixed(11, 1, "All Saints' Day");
        fixed(12, 8, "Immaculate Conception");
        if year >= 2022 {
            fixed(12, 9, "Battle of Ayacucho");
        }
        fixed(12, 25, "Christmas Day");

        let easter = easter_sunday(year).ok_or_else(|| PayrollError::CalendarLookupFailure {
            year,
            message: "could not compute Easter Sunday".to_string(),
        })?;
        set.insert(easter - Duration::days(3), "Maundy Thursday");
        set.insert(easter - Duration::days(2), "Good Friday");
        set.insert(easter, "Easter Sunday");

        Ok(set)
    }
}

/// Computes Western (Gregorian) Easter Sunday for `year`.
///
/// Uses the anonymous Gregorian computus (Meeus/Jones/Butcher).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2000), Some(date(2000, 4, 23)));
        assert_eq!(easter_sunday(2019), Some(date(2019, 4, 21)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn test_holy_week_2025() {
        let set = PeruHolidays.holidays_for_year(2025).unwrap();
        assert_eq!(set.name_of(date(2025, 4, 17)), Some("Maundy Thursday"));
        assert_eq!(set.name_of(date(2025, 4, 18)), Some("Good Friday"));
        assert_eq!(set.name_of(date(2025, 4, 20)), Some("Easter Sunday"));
    }

    #[test]
    fn test_fixed_holidays_2025() {
        let set = PeruHolidays.holidays_for_year(2025).unwrap();
        for (m, d) in [
            (1, 1),
            (5, 1),
            (6, 7),
            (6, 29),
            (7, 23),
            (7, 28),
            (7, 29),
            (8, 6),
            (8, 30),
            (10, 8),
            (11, 1),
            (12, 8),
            (12, 9),
            (12, 25),
        ] {
            assert!(set.contains(date(2025, m, d)), "missing 2025-{}-{}", m, d);
        }
        assert_eq!(set.len(), 17);
    }

    #[test]
    fn test_recent_holidays_not_observed_before_introduction() {
        let set = PeruHolidays.holidays_for_year(2021).unwrap();
        assert!(!set.contains(date(2021, 6, 7)));
        assert!(!set.contains(date(2021, 8, 6)));
        assert!(!set.contains(date(2021, 12, 9)));

        let set = PeruHolidays.holidays_for_year(2023).unwrap();
        assert!(set.contains(date(2023, 6, 7)));
        assert!(!set.contains(date(2023, 7, 23)));
    }

    #[test]
    fn test_ordinary_working_day_is_not_a_holiday() {
        let set = PeruHolidays.holidays_for_year(2025).unwrap();
        assert!(!set.contains(date(2025, 3, 12)));
    }

    #[test]
    fn test_unsupported_year_fails() {
        let result = PeruHolidays.holidays_for_year(2150);
        assert!(matches!(
            result,
            Err(PayrollError::CalendarLookupFailure { year: 2150, .. })
        ));
        assert!(PeruHolidays.holidays_for_year(1899).is_err());
    }
}
