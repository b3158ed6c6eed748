//! Error types for the overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report to its callers.

use thiserror::Error;

/// The main error type for the overtime engine.
///
/// Validation failures (`InvalidInput`, `MissingInput`) are raised at the
/// boundary before any computation runs. `CalendarLookupFailure` is produced
/// by holiday providers and is normally absorbed into a degraded-mode warning
/// on the report rather than returned to the caller.
///
/// # Example
///
/// ```
/// use overtime_engine::error::PayrollError;
///
/// let error = PayrollError::MissingInput {
///     field: "employee_name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required input: employee_name");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A value was present but could not be accepted.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A required value was absent, or there is nothing to compute.
    #[error("Missing required input: {field}")]
    MissingInput {
        /// The field that was missing.
        field: String,
    },

    /// The holiday source could not provide dates for a year.
    #[error("Holiday calendar unavailable for {year}: {message}")]
    CalendarLookupFailure {
        /// The year that was requested.
        year: i32,
        /// Why the lookup failed.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Loading or saving overtime entries failed.
    #[error("Entry storage error at '{path}': {message}")]
    Storage {
        /// The backing location of the store.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Writing a report to an output sink failed.
    #[error("Report export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },

    /// The HTTP server could not bind its address or stopped with an I/O error.
    #[error("Server error on '{address}': {message}")]
    Server {
        /// The address the server was bound, or binding, to.
        address: String,
        /// A description of the failure.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for an [`PayrollError::InvalidInput`] error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        PayrollError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`PayrollError::MissingInput`] error.
    pub fn missing(field: impl Into<String>) -> Self {
        PayrollError::MissingInput {
            field: field.into(),
        }
    }

    /// Wraps an I/O failure of the HTTP server listening on `address`.
    pub fn server(address: impl Into<String>, err: std::io::Error) -> Self {
        PayrollError::Server {
            address: address.into(),
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = PayrollError::invalid("monthly_salary", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid input 'monthly_salary': must not be negative"
        );
    }

    #[test]
    fn test_missing_input_displays_field() {
        let error = PayrollError::missing("entries");
        assert_eq!(error.to_string(), "Missing required input: entries");
    }

    #[test]
    fn test_calendar_lookup_failure_displays_year() {
        let error = PayrollError::CalendarLookupFailure {
            year: 2150,
            message: "outside supported range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday calendar unavailable for 2150: outside supported range"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_storage_error_displays_path() {
        let error = PayrollError::Storage {
            path: "entries.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Entry storage error at 'entries.json': permission denied"
        );
    }

    #[test]
    fn test_server_error_wraps_io_failure() {
        let io_error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let error = PayrollError::server("127.0.0.1:3000", io_error);
        assert!(matches!(error, PayrollError::Server { .. }));
        assert_eq!(
            error.to_string(),
            "Server error on '127.0.0.1:3000': address in use"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing() -> PayrollResult<()> {
            Err(PayrollError::missing("employee_name"))
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_missing()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(PayrollError::MissingInput { .. })
        ));
    }
}
