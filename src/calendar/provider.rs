//! Holiday sources.
//!
//! A [`HolidayProvider`] turns a year into the set of public-holiday dates
//! observed in that year. Providers are injected into the calculator so the
//! backing source (computed rules, configuration files, an external service)
//! is a deployment choice.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A named public holiday.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: String,
}

/// The public holidays of one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday. A date added twice keeps its first name.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.dates.entry(date).or_insert_with(|| name.into());
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    /// Returns the holiday name for `date`.
    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Adds every holiday from `other` that is not already present.
    pub fn merge(&mut self, other: &HolidaySet) {
        for (date, name) in &other.dates {
            self.insert(*date, name.clone());
        }
    }

    /// Returns the holidays in date order.
    pub fn holidays(&self) -> Vec<PublicHoliday> {
        self.dates
            .iter()
            .map(|(date, name)| PublicHoliday {
                date: *date,
                name: name.clone(),
            })
            .collect()
    }
}

impl FromIterator<PublicHoliday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = PublicHoliday>>(iter: I) -> Self {
        let mut set = HolidaySet::new();
        for holiday in iter {
            set.insert(holiday.date, holiday.name);
        }
        set
    }
}

/// A source of public-holiday dates.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Peru"`).
    fn name(&self) -> &str;

    /// Returns the holidays observed in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::CalendarLookupFailure`] when the source has no
    /// data for the year.
    fn holidays_for_year(&self, year: i32) -> PayrollResult<HolidaySet>;
}

/// A provider with no public holidays; only rest days are premium.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn holidays_for_year(&self, _year: i32) -> PayrollResult<HolidaySet> {
        Ok(HolidaySet::new())
    }
}

/// A provider backed by fixed holiday lists, grouped by year.
///
/// Years without any listed holiday are treated as unknown and fail the
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    name: String,
    years: HashMap<i32, HolidaySet>,
}

impl StaticHolidays {
    /// Builds a provider from a list of holidays spanning any number of years.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = PublicHoliday>) -> Self {
        let mut years: HashMap<i32, HolidaySet> = HashMap::new();
        for holiday in holidays {
            years
                .entry(holiday.date.year())
                .or_default()
                .insert(holiday.date, holiday.name);
        }
        Self {
            name: name.into(),
            years,
        }
    }

    /// Returns true if the provider has holidays listed for `year`.
    pub fn covers(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }
}

impl HolidayProvider for StaticHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_for_year(&self, year: i32) -> PayrollResult<HolidaySet> {
        self.years
            .get(&year)
            .cloned()
            .ok_or_else(|| PayrollError::CalendarLookupFailure {
                year,
                message: format!("no holidays listed for {} in '{}'", year, self.name),
            })
    }
}

/// A primary provider extended with locally configured extra holidays.
///
/// A failure of the primary provider fails the lookup; extra dates alone do
/// not make a year known.
#[derive(Debug)]
pub struct LayeredHolidays {
    primary: Box<dyn HolidayProvider>,
    extra: StaticHolidays,
}

impl LayeredHolidays {
    /// Layers `extra` on top of `primary`.
    pub fn new(primary: Box<dyn HolidayProvider>, extra: StaticHolidays) -> Self {
        Self { primary, extra }
    }
}

impl HolidayProvider for LayeredHolidays {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn holidays_for_year(&self, year: i32) -> PayrollResult<HolidaySet> {
        let mut set = self.primary.holidays_for_year(year)?;
        if let Ok(extra) = self.extra.holidays_for_year(year) {
            set.merge(&extra);
        }
        Ok(set)
    }
}
