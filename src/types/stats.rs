//! Derived, human-readable folder statistics and timestamp formatting.
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::constants::{BYTES_PER_MB, DATETIME_ZERO, SECS_PER_DAY};

use super::entry::Timestamps;

/// The `folder_stats` object attached to every report and creator record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FolderStats {
    pub atime_datetime: String,
    pub ctime_datetime: String,
    pub mtime_datetime: String,
    /// Whole days since the most recent activity along any timestamp axis.
    pub days_unused: i64,
    pub size_bytes: u64,
    pub size_mb: f64,
}

impl FolderStats {
    /// Derive the reportable view from aggregated timestamps and size.
    /// `now` is the scrape time the scan started with, so every record of
    /// one scan is relative to the same instant.
    #[must_use]
    pub fn derive(times: &Timestamps, size: u64, now: i64) -> FolderStats {
        FolderStats {
            atime_datetime: format_epoch(times.atime),
            ctime_datetime: format_epoch(times.ctime),
            mtime_datetime: format_epoch(times.mtime),
            days_unused: (now - times.latest()) / SECS_PER_DAY,
            size_bytes: size,
            size_mb: size as f64 / BYTES_PER_MB as f64,
        }
    }
}

/// Format unix seconds as a `YYYY-MM-DD HH:MM:SS` UTC string, falling back
/// to the epoch rendering when the value is out of range.
#[must_use]
pub fn format_epoch(secs: i64) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|t| t.format(&fmt).ok())
        .unwrap_or_else(|| DATETIME_ZERO.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_seconds() {
        assert_eq!(format_epoch(0), "1970-01-01 00:00:00");
        assert_eq!(format_epoch(1_700_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn derives_days_unused_from_latest_axis() {
        let now = 100 * SECS_PER_DAY;
        let times = Timestamps {
            atime: now - 5 * SECS_PER_DAY,
            ctime: now - 40 * SECS_PER_DAY,
            mtime: now - 40 * SECS_PER_DAY,
        };
        let stats = FolderStats::derive(&times, 2 * BYTES_PER_MB, now);
        // atime is the most recent activity, so 5 days, not 40.
        assert_eq!(stats.days_unused, 5);
        assert_eq!(stats.size_bytes, 2 * BYTES_PER_MB);
        assert!((stats.size_mb - 2.0).abs() < f64::EPSILON);
    }
}
