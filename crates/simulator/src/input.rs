//! Process-list file parsing.
//!
//! The input collaborator for the simulation engines. One
//! `id,arrival,burst,priority` record per line; blank lines are ignored and
//! malformed lines are skipped (logged, never retained), so the engines only
//! ever see validated records.

use schedsim_types::{ProcessId, ProcessSpec};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Errors raised while loading a process list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read process file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained no valid process records.
    #[error("process file contained no valid records")]
    NoProcesses,
}

/// Load and validate a process list from `path`.
///
/// Lines that do not parse as four comma-separated non-negative integers, or
/// that fail [`ProcessSpec::validate`] (zero burst), are skipped with a
/// warning. An unreadable file or a file yielding zero valid records is an
/// error: the simulators must never run on an empty set.
pub fn parse_process_file(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, InputError> {
    let contents = fs::read_to_string(path)?;

    let mut specs = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(spec) => specs.push(spec),
            None => warn!(line = number + 1, "skipping malformed process record"),
        }
    }

    if specs.is_empty() {
        return Err(InputError::NoProcesses);
    }
    Ok(specs)
}

/// Parse one `id,arrival,burst,priority` record. `None` if the line is
/// malformed or fails validation.
fn parse_line(line: &str) -> Option<ProcessSpec> {
    let mut fields = line.split(',').map(str::trim);

    let id = fields.next()?.parse().ok()?;
    let arrival_time = fields.next()?.parse().ok()?;
    let burst_duration = fields.next()?.parse().ok()?;
    let priority = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    let spec = ProcessSpec {
        id: ProcessId(id),
        arrival_time,
        burst_duration,
        priority,
    };
    spec.validate().ok()?;
    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_input(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("processes.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_parses_well_formed_records() {
        let (_dir, path) = write_input("1,0,5,2\n2,1,4,1\n");
        let specs = parse_process_file(&path).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].id, ProcessId(1));
        assert_eq!(specs[1].arrival_time, 1);
        assert_eq!(specs[1].burst_duration, 4);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let (_dir, path) = write_input("\n1,0,5,2\n\n\n2,1,4,1\n\n");
        assert_eq!(parse_process_file(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let input = "1,0,5,2\nnot,a,record\n3,2\n4,1,0,1\n5,-1,3,1\n6,1,4,1\n";
        let (_dir, path) = write_input(input);
        let specs = parse_process_file(&path).unwrap();

        // Only the well-formed, positive-burst records survive: ids 1 and 6.
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].id, ProcessId(1));
        assert_eq!(specs[1].id, ProcessId(6));
    }

    #[test]
    fn test_whitespace_tolerated_within_fields() {
        let (_dir, path) = write_input(" 1 , 0 , 5 , 2 \n");
        let specs = parse_process_file(&path).unwrap();
        assert_eq!(specs[0].burst_duration, 5);
    }

    #[test]
    fn test_trailing_field_rejected() {
        let (_dir, path) = write_input("1,0,5,2,9\n2,0,3,1\n");
        let specs = parse_process_file(&path).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].id, ProcessId(2));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let (_dir, path) = write_input("\n\n");
        assert!(matches!(
            parse_process_file(&path),
            Err(InputError::NoProcesses)
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.txt");
        assert!(matches!(parse_process_file(missing), Err(InputError::Io(_))));
    }
}
