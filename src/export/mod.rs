//! Report export.
//!
//! Writes a [`PayrollReport`](crate::models::PayrollReport) to an output sink
//! as CSV (one row per line item) or JSON (the full report).

mod csv;

pub use self::csv::{REPORT_HEADERS, write_report_csv};

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollReport;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated line items with the fixed report headers.
    #[default]
    Csv,
    /// The full report, pretty-printed.
    Json,
}

/// Writes `report` to `writer` in `format`.
pub fn write_report<W: Write>(
    writer: W,
    report: &PayrollReport,
    format: ExportFormat,
) -> PayrollResult<()> {
    match format {
        ExportFormat::Csv => write_report_csv(writer, report),
        ExportFormat::Json => write_report_json(writer, report),
    }
}

/// Writes the full report as pretty-printed JSON.
pub fn write_report_json<W: Write>(writer: W, report: &PayrollReport) -> PayrollResult<()> {
    serde_json::to_writer_pretty(writer, report).map_err(|e| PayrollError::Export {
        message: e.to_string(),
    })
}
