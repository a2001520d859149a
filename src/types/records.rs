//! Record shapes at the log boundary: scan header and timing lines, the
//! per-path report record, and the per-owner creator record.
//!
//! All of these serialize as one JSON object per line. Readers distinguish
//! line types by key presence (`scrape_time` → header,
//! `time_for_scrape_sec` → timing, `path` → report record), never by line
//! position.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SCHEMA_VERSION;

use super::expiry::{Diagnostics, ExpiryResult};
use super::owner::Owner;
use super::stats::{format_epoch, FolderStats};

/// First line of every log: identifies the scan and when it ran.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanHeader {
    #[serde(default = "default_schema_version")]
    pub schema_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<Uuid>,
    pub scrape_time: i64,
    pub scrape_time_datetime: String,
    /// Formatted absolute cutoff; absent on creator logs, which inherit
    /// the cutoff of the scan they were derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_threshold: Option<String>,
    /// Entries that vanished mid-walk, recorded for auditability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_entries: Option<u64>,
    /// Entries the scan had no rights to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denied_entries: Option<u64>,
}

fn default_schema_version() -> i64 {
    SCHEMA_VERSION
}

impl ScanHeader {
    #[must_use]
    pub fn new(
        scan_id: Uuid,
        scrape_time: i64,
        cutoff: Option<i64>,
        diagnostics: &Diagnostics,
    ) -> ScanHeader {
        ScanHeader {
            schema_version: SCHEMA_VERSION,
            scan_id: Some(scan_id),
            scrape_time,
            scrape_time_datetime: format_epoch(scrape_time),
            expiry_threshold: cutoff.map(format_epoch),
            skipped_entries: (diagnostics.vanished > 0).then_some(diagnostics.vanished),
            denied_entries: (diagnostics.denied > 0).then_some(diagnostics.denied),
        }
    }
}

/// Second line of every log: how long the scan took.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanTiming {
    pub time_for_scrape_sec: f64,
    pub time_for_scrape_min: f64,
}

impl ScanTiming {
    #[must_use]
    pub fn from_duration(elapsed: Duration) -> ScanTiming {
        let secs = elapsed.as_secs_f64();
        ScanTiming {
            time_for_scrape_sec: secs,
            time_for_scrape_min: secs / 60.0,
        }
    }
}

/// One body line of a scan log: the classification of one top-level path.
/// Self-contained (carries its own path) so a log remains usable
/// independent of its filename.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub path: PathBuf,
    /// Owners that passed the attribution filter, in uid order.
    pub creators: Vec<Owner>,
    pub expired: bool,
    pub folder_stats: FolderStats,
}

impl ReportRecord {
    /// Build the boundary record from a classification result. Applies the
    /// attribution filter to the owner set; the unfiltered set stays on
    /// the [`ExpiryResult`].
    #[must_use]
    pub fn build(path: &Path, result: &ExpiryResult, scrape_time: i64) -> ReportRecord {
        ReportRecord {
            path: path.to_path_buf(),
            creators: result
                .owners
                .iter()
                .filter(|o| o.is_attributable())
                .cloned()
                .collect(),
            expired: result.expired,
            folder_stats: FolderStats::derive(&result.times, result.size, scrape_time),
        }
    }
}

/// One body line of a creator log: every expired path one owner
/// contributed to, with the path's folder statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub paths: BTreeMap<String, FolderStats>,
    pub name: String,
    pub uid: u32,
    pub gid: u32,
}

/// A parsed scan log. Header and timing are optional because appended runs
/// add records without rewriting the header.
#[derive(Clone, Debug, Default)]
pub struct ScanLog {
    pub header: Option<ScanHeader>,
    pub timing: Option<ScanTiming>,
    pub records: Vec<ReportRecord>,
}

/// Creator records keyed by uid. BTreeMap keeps output order
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct CreatorIndex {
    pub by_uid: BTreeMap<u32, CreatorRecord>,
}

impl CreatorIndex {
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }

    #[must_use]
    pub fn get(&self, uid: u32) -> Option<&CreatorRecord> {
        self.by_uid.get(&uid)
    }
}
