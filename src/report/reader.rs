//! Parse a scan log back into typed records.
//!
//! Line types are selected by key presence — an object with `path` is a
//! report record, `scrape_time` a header, `time_for_scrape_sec` a timing
//! line — never by line position, so appended runs and reordered lines
//! parse the same.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::types::errors::{Error, Result};
use crate::types::{ReportRecord, ScanHeader, ScanLog, ScanTiming};

/// Read and parse the scan log at `path`.
///
/// Fails with [`Error::SourceNotFound`] if the file does not exist and
/// with [`Error::Parse`] (carrying the line number) on a malformed or
/// unrecognized line. Blank lines are tolerated.
pub fn read_scan_log(path: &Path) -> Result<ScanLog> {
    let file = File::open(path).map_err(|e| map_open_io(path, e))?;
    let reader = BufReader::new(file);
    let mut log = ScanLog::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| crate::fs::meta::map_io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let number = idx + 1;
        let value: Value = serde_json::from_str(&line).map_err(|e| Error::Parse {
            line: number,
            msg: e.to_string(),
        })?;
        if value.get("path").is_some() {
            let record: ReportRecord = parse_line(value, number)?;
            log.records.push(record);
        } else if value.get("scrape_time").is_some() {
            let header: ScanHeader = parse_line(value, number)?;
            log.header = Some(header);
        } else if value.get("time_for_scrape_sec").is_some() {
            let timing: ScanTiming = parse_line(value, number)?;
            log.timing = Some(timing);
        } else {
            return Err(Error::Parse {
                line: number,
                msg: "unrecognized record shape".to_string(),
            });
        }
    }
    Ok(log)
}

fn parse_line<T: serde::de::DeserializeOwned>(value: Value, line: usize) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Parse {
        line,
        msg: e.to_string(),
    })
}

pub(crate) fn map_open_io(path: &Path, e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::NotFound {
        Error::SourceNotFound(path.to_path_buf())
    } else {
        crate::fs::meta::map_io(path, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_is_source_not_found() {
        let err = read_scan_log(Path::new("/nonexistent/scan.jsonl")).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn unrecognized_line_reports_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.jsonl");
        std::fs::write(&path, "{\"bogus\": 1}\n").unwrap();
        match read_scan_log(&path).unwrap_err() {
            Error::Parse { line, .. } => assert_eq!(line, 1),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
