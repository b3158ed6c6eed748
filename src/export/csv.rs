//! CSV report export.

use std::io::Write;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollReport;

/// Column headers of an exported report, in order.
pub const REPORT_HEADERS: [&str; 4] = ["Employee", "Date", "Hours Extra", "Extra Pay"];

/// Writes one CSV row per line item.
///
/// Dates are ISO 8601 (`YYYY-MM-DD`); pay is always written with 2 decimals.
///
/// # Example
///
/// ```
/// use overtime_engine::export::write_report_csv;
/// use overtime_engine::models::PayrollReport;
/// use rust_decimal::Decimal;
///
/// let report = PayrollReport {
///     employee_name: "Marco".to_string(),
///     hourly_rate: Decimal::new(866, 2),
///     line_items: vec![],
///     total: Decimal::ZERO,
///     calendar_warnings: vec![],
///     audit_steps: vec![],
/// };
///
/// let mut out = Vec::new();
/// write_report_csv(&mut out, &report).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Employee,Date,Hours Extra,Extra Pay\n");
/// ```
pub fn write_report_csv<W: Write>(writer: W, report: &PayrollReport) -> PayrollResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);

    wtr.write_record(REPORT_HEADERS).map_err(export_error)?;

    for item in &report.line_items {
        wtr.write_record([
            item.employee_name.clone(),
            item.date.format("%Y-%m-%d").to_string(),
            item.hours.normalize().to_string(),
            format!("{:.2}", item.pay_amount),
        ])
        .map_err(export_error)?;
    }

    wtr.flush().map_err(export_error)?;
    Ok(())
}

fn export_error(err: impl std::fmt::Display) -> PayrollError {
    PayrollError::Export {
        message: err.to_string(),
    }
}
