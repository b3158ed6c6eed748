//! Clock-based overtime derivation.
//!
//! Some deployments record the start and end of the day's shift instead of
//! the overtime hours directly. [`ShiftTimes`] turns those clock times into
//! overtime hours against the standard daily hours. A shift whose end time is
//! not after its start time finishes on the following day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How overtime hours are supplied by callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftMode {
    /// Callers supply overtime hours directly.
    #[default]
    Fixed,
    /// Callers supply shift start/end times; overtime is derived from them.
    Clock,
}

/// Start and end clock times of a worked shift.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::ShiftTimes;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// // 22:00 to 07:30 the next morning
/// let shift = ShiftTimes {
///     start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
/// };
/// assert!(shift.is_overnight());
/// assert_eq!(shift.worked_hours(), Decimal::new(95, 1));
/// assert_eq!(shift.overtime_hours(Decimal::from(8)), Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTimes {
    /// When the shift started.
    pub start: NaiveTime,
    /// When the shift ended; not after `start` means the next day.
    pub end: NaiveTime,
}

const MINUTES_PER_DAY: i64 = 24 * 60;

impl ShiftTimes {
    /// Returns true if the shift ends on the day after it starts.
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }

    /// Returns the shift length in hours, to minute precision.
    pub fn worked_hours(&self) -> Decimal {
        let start = minutes_since_midnight(self.start);
        let end = minutes_since_midnight(self.end);
        let minutes = if self.is_overnight() {
            end + MINUTES_PER_DAY - start
        } else {
            end - start
        };

        let hours = Decimal::from(minutes) / Decimal::from(60);
        hours.round_dp(4).normalize()
    }

    /// Returns hours worked beyond `standard_daily_hours`, never negative.
    pub fn overtime_hours(&self, standard_daily_hours: Decimal) -> Decimal {
        (self.worked_hours() - standard_daily_hours)
            .max(Decimal::ZERO)
            .normalize()
    }
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(start: (u32, u32), end: (u32, u32)) -> ShiftTimes {
        ShiftTimes {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_day_shift_hours() {
        let s = shift((8, 0), (18, 0));
        assert!(!s.is_overnight());
        assert_eq!(s.worked_hours(), dec("10"));
        assert_eq!(s.overtime_hours(dec("8")), dec("2"));
    }

    #[test]
    fn test_overnight_shift_hours() {
        let s = shift((22, 0), (6, 0));
        assert!(s.is_overnight());
        assert_eq!(s.worked_hours(), dec("8"));
        assert_eq!(s.overtime_hours(dec("8")), Decimal::ZERO);
    }

    #[test]
    fn test_equal_times_is_a_full_day() {
        let s = shift((7, 0), (7, 0));
        assert_eq!(s.worked_hours(), dec("24"));
    }

    #[test]
    fn test_short_shift_has_no_overtime() {
        let s = shift((9, 0), (13, 0));
        assert_eq!(s.overtime_hours(dec("8")), Decimal::ZERO);
    }

    #[test]
    fn test_partial_hours() {
        let s = shift((8, 0), (18, 20));
        // 10h20m = 10.3333
        assert_eq!(s.worked_hours(), dec("10.3333"));
    }

    #[test]
    fn test_shift_mode_deserializes_snake_case() {
        let mode: ShiftMode = serde_yaml::from_str("clock").unwrap();
        assert_eq!(mode, ShiftMode::Clock);
        assert_eq!(ShiftMode::default(), ShiftMode::Fixed);
    }

    #[test]
    fn test_shift_times_deserialize_from_clock_strings() {
        let s: ShiftTimes =
            serde_json::from_str(r#"{"start": "20:00:00", "end": "06:30:00"}"#).unwrap();
        assert_eq!(s.worked_hours(), dec("10.5"));
    }
}
