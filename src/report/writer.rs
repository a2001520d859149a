//! Serialize scan and creator output as JSON Lines.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::scan::ScanOutcome;
use crate::types::errors::Result;
use crate::types::{CreatorIndex, ScanHeader, ScanTiming};

/// Write a completed scan to `path`.
///
/// With `overwrite` the file is truncated and the header and timing lines
/// are written first; without it, records are appended to an existing log
/// and the original header stands. Record insertion order is preserved.
pub fn write_scan_log(path: &Path, outcome: &ScanOutcome, overwrite: bool) -> Result<()> {
    let mut out = open_log(path, overwrite)?;
    if overwrite {
        write_line(&mut out, path, &outcome.header)?;
        write_line(&mut out, path, &outcome.timing)?;
    }
    for record in &outcome.records {
        write_line(&mut out, path, record)?;
    }
    out.flush().map_err(|e| crate::fs::meta::map_io(path, e))
}

/// Write a creator index to `path`, one owner per line, under the given
/// header and timing lines.
pub fn write_creator_log(
    path: &Path,
    index: &CreatorIndex,
    header: &ScanHeader,
    timing: &ScanTiming,
    overwrite: bool,
) -> Result<()> {
    let mut out = open_log(path, overwrite)?;
    if overwrite {
        write_line(&mut out, path, header)?;
        write_line(&mut out, path, timing)?;
    }
    for record in index.by_uid.values() {
        write_line(&mut out, path, record)?;
    }
    out.flush().map_err(|e| crate::fs::meta::map_io(path, e))
}

fn open_log(path: &Path, overwrite: bool) -> Result<BufWriter<File>> {
    let file = if overwrite {
        File::create(path)
    } else {
        OpenOptions::new().create(true).append(true).open(path)
    };
    file.map(BufWriter::new)
        .map_err(|e| crate::fs::meta::map_io(path, e))
}

fn write_line<T: Serialize>(out: &mut BufWriter<File>, path: &Path, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")
        .map_err(|e| crate::fs::meta::map_io(path, e))
}
