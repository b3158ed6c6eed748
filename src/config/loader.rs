//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading deployment
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::PublicHoliday;
use crate::error::{PayrollError, PayrollResult};

use super::types::{ExtraHolidaysConfig, PayrollConfig};

/// Loads and provides access to deployment configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml        # Standard hours, rate table, rest days, country
/// └── holidays/           # Optional
///     └── 2025.yaml       # Extra holidays (any file name ending in .yaml)
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Rest days: {:?}", loader.config().rest_days.days());
/// # Ok::<(), overtime_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The standard hours or rate table are invalid
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let mut config = Self::load_yaml::<PayrollConfig>(&payroll_path)?;

        let holidays_dir = path.join("holidays");
        if holidays_dir.exists() {
            config
                .extra_holidays
                .extend(Self::load_extra_holidays(&holidays_dir)?);
        }

        config
            .validate()
            .map_err(|e| PayrollError::ConfigParseError {
                path: payroll_path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            holiday_country = ?config.holiday_country,
            extra_holidays = config.extra_holidays.len(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every extra-holidays file from the holidays directory.
    fn load_extra_holidays(holidays_dir: &Path) -> PayrollResult<Vec<PublicHoliday>> {
        let dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| PayrollError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PayrollError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut holidays = Vec::new();
        for path in paths {
            let file = Self::load_yaml::<ExtraHolidaysConfig>(&path)?;
            holidays.extend(file.holidays);
        }

        Ok(holidays)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{RateTable, ShiftMode};
    use crate::calendar::RestDays;
    use crate::config::HolidayCountry;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn temp_config_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "overtime_engine_config_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_default_config() {
        let loader = ConfigLoader::load("config/default").unwrap();
        let config = loader.config();
        assert_eq!(config.rate_table, RateTable::surcharge());
        assert_eq!(config.rest_days, RestDays::weekend());
        assert_eq!(config.holiday_country, HolidayCountry::Peru);
        assert_eq!(config.shift_mode, ShiftMode::Fixed);
    }

    #[test]
    fn test_load_full_rate_config() {
        let loader = ConfigLoader::load("config/full-rate").unwrap();
        let config = loader.config();
        assert_eq!(config.rate_table, RateTable::full_rate());
        assert_eq!(config.rest_days, RestDays::sunday_only());
        assert_eq!(config.shift_mode, ShiftMode::Clock);
    }

    #[test]
    fn test_missing_directory_reports_payroll_path() {
        let result = ConfigLoader::load("/nonexistent/config");
        match result {
            Err(PayrollError::ConfigNotFound { path }) => assert!(path.ends_with("payroll.yaml")),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let dir = temp_config_dir("invalid_yaml");
        fs::write(dir.join("payroll.yaml"), "rest_days: [notaday]").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_values_report_parse_error() {
        let dir = temp_config_dir("invalid_values");
        fs::write(
            dir.join("payroll.yaml"),
            "standard_hours:\n  daily_hours: \"0\"\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(message.contains("daily_hours"))
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_holidays_directory_is_merged() {
        let dir = temp_config_dir("extra_holidays");
        fs::write(dir.join("payroll.yaml"), "holiday_country: none\n").unwrap();
        fs::create_dir_all(dir.join("holidays")).unwrap();
        fs::write(
            dir.join("holidays").join("2025.yaml"),
            "holidays:\n  - date: 2025-06-02\n    name: Company anniversary\n",
        )
        .unwrap();
        fs::write(dir.join("holidays").join("notes.txt"), "ignored").unwrap();

        let config = ConfigLoader::load(&dir).unwrap().into_config();
        assert_eq!(config.extra_holidays.len(), 1);

        let set = config.holiday_provider().holidays_for_year(2025).unwrap();
        assert!(set.contains(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }
}
