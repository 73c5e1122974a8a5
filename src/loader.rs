//! CSV loading of process records.
//!
//! # Format
//!
//! One process per row, no header:
//!
//! ```text
//! id, burst, arrival[, priority]
//! ```
//!
//! Fields are integers, optionally wrapped in double quotes; surrounding
//! whitespace is ignored and blank lines are skipped. Quoted fields may not
//! contain commas. Priority defaults to 0 when the row has three fields.

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SimError, SimResult};
use crate::models::Process;
use crate::validation::validate_processes;

const FIELD_NAMES: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Loads and validates processes from a CSV file.
pub fn load_processes_file(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SimError::file_access(
            format!("error opening scheduling file {}", path.display()),
            e,
        )
    })?;

    let processes = load_processes(BufReader::new(file))?;
    info!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Loads and validates processes from any buffered reader.
///
/// # Example
/// ```
/// use proc_schedule::loader::load_processes;
///
/// let input = "1,4,0\n2,3,1,2\n";
/// let processes = load_processes(input.as_bytes()).unwrap();
///
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].priority, 2);
/// ```
pub fn load_processes<R: BufRead>(reader: R) -> SimResult<Vec<Process>> {
    let mut processes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| SimError::file_access("error reading scheduling file", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let process = parse_row(line_no, &line)?;
        debug!("line {line_no}: {process:?}");
        processes.push(process);
    }

    validate_processes(&processes).map_err(|errors| SimError::from_validation(&errors))?;
    Ok(processes)
}

/// Trims a field and strips one pair of surrounding double quotes.
fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map_or(field, str::trim)
}

/// Parses one CSV row.
fn parse_row(line_no: usize, line: &str) -> SimResult<Process> {
    let fields: Vec<&str> = line.split(',').map(unquote).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(SimError::malformed(
            line_no,
            format!("expected 3 or 4 fields, found {}", fields.len()),
        ));
    }

    let mut values = [0i64; 4];
    for (i, field) in fields.iter().enumerate() {
        values[i] = field.parse().map_err(|_| {
            SimError::malformed(
                line_no,
                format!("{} is not an integer: {:?}", FIELD_NAMES[i], field),
            )
        })?;
    }

    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, burst)
        .with_arrival(arrival)
        .with_priority(priority))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimErrorKind;

    #[test]
    fn test_three_and_four_fields() {
        let processes = load_processes("1,4,0\n2,3,1,5\n".as_bytes()).unwrap();

        assert_eq!(processes[0], Process::new(1, 4));
        assert_eq!(
            processes[1],
            Process::new(2, 3).with_arrival(1).with_priority(5)
        );
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let processes = load_processes(" 1, 4 , 0\n\n  \n2,3,1\n".as_bytes()).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1].id, 2);
    }

    #[test]
    fn test_quoted_fields() {
        let input = "\"1\",\"4\",\"0\"\n2, \" 3 \" ,1,\"2\"\n";
        let processes = load_processes(input.as_bytes()).unwrap();
        assert_eq!(processes[0], Process::new(1, 4));
        assert_eq!(processes[1], Process::new(2, 3).with_arrival(1).with_priority(2));
    }

    #[test]
    fn test_non_integer_field() {
        let err = load_processes("1,4,0\n2,x,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::MalformedInput);
        assert_eq!(err.line, Some(2));
        assert!(err.message.contains("burst"));
    }

    #[test]
    fn test_float_field_rejected() {
        let err = load_processes("1,4.5,0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::MalformedInput);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = load_processes("1,4\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::MalformedInput);
        assert_eq!(err.line, Some(1));

        let err = load_processes("1,4,0,1,9\n".as_bytes()).unwrap_err();
        assert!(err.message.contains("found 5"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = load_processes("1,4,0\n1,2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::MalformedInput);
        assert!(err.message.contains("Duplicate"));
    }

    #[test]
    fn test_zero_burst_rejected() {
        let err = load_processes("1,0,0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::MalformedInput);
    }

    #[test]
    fn test_empty_input() {
        assert!(load_processes("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_processes_file("/nonexistent/processes.csv").unwrap_err();
        assert_eq!(err.kind, SimErrorKind::FileAccess);
    }
}
