//! Output handling for CLI
//!
//! - Command results: one JSON object on stdout
//! - Violations: one human-readable line each on stderr
//! - UTF-8 only

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::schema::ValidationReport;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_json_line(&mut io::stdout(), &response)
}

/// Write every violation and warning in `report`, one per line.
pub fn write_report<W: Write>(writer: &mut W, report: &ValidationReport) -> CliResult<()> {
    for violation in &report.violations {
        writeln!(writer, "{}", violation)?;
    }
    for warning in &report.warnings {
        writeln!(writer, "warning: {}", warning)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the violations in `report` to stderr.
pub fn write_violations(report: &ValidationReport) -> CliResult<()> {
    write_report(&mut io::stderr(), report)
}

/// Write `value` as pretty JSON to `out`, or to stdout when `out` is `None`.
pub fn write_document<T: Serialize>(value: &T, out: Option<&Path>) -> CliResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    match out {
        Some(path) => fs::write(path, json)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn write_json_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
