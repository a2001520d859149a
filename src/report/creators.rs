//! Re-index a scan log by owner.
use crate::types::{CreatorIndex, CreatorRecord, ScanLog};

/// Build the per-owner view of a scan: for every record marked expired,
/// each attributable owner gains a `path → folder_stats` mapping. Owners
/// accumulate across records into one creator record keyed by uid;
/// last-write-wins if a path recurs. Records not marked expired and
/// non-attributable owners (uid 0, or uid ≠ gid) are skipped — the filter
/// is applied here as well as at record build time so logs produced
/// elsewhere get the same treatment.
#[must_use]
pub fn aggregate_creators(log: &ScanLog) -> CreatorIndex {
    let mut index = CreatorIndex::default();
    for record in &log.records {
        if !record.expired {
            continue;
        }
        for owner in &record.creators {
            if !owner.is_attributable() {
                continue;
            }
            let creator = index
                .by_uid
                .entry(owner.uid)
                .or_insert_with(|| CreatorRecord {
                    paths: Default::default(),
                    name: owner.name.clone(),
                    uid: owner.uid,
                    gid: owner.gid,
                });
            creator
                .paths
                .insert(record.path.display().to_string(), record.folder_stats.clone());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FolderStats, Owner, ReportRecord};
    use std::path::PathBuf;

    fn stats(days: i64) -> FolderStats {
        FolderStats {
            atime_datetime: "2024-01-01 00:00:00".into(),
            ctime_datetime: "2024-01-01 00:00:00".into(),
            mtime_datetime: "2024-01-01 00:00:00".into(),
            days_unused: days,
            size_bytes: 10,
            size_mb: 0.0,
        }
    }

    fn record(path: &str, expired: bool, creators: Vec<Owner>) -> ReportRecord {
        ReportRecord {
            path: PathBuf::from(path),
            creators,
            expired,
            folder_stats: stats(40),
        }
    }

    fn owner(name: &str, uid: u32, gid: u32) -> Owner {
        Owner { name: name.into(), uid, gid }
    }

    #[test]
    fn groups_expired_paths_by_owner() {
        let log = ScanLog {
            header: None,
            timing: None,
            records: vec![
                record("/data/a", true, vec![owner("alice", 1000, 1000)]),
                record("/data/b", true, vec![owner("alice", 1000, 1000), owner("bob", 2000, 2000)]),
                record("/data/c", false, vec![owner("carol", 3000, 3000)]),
            ],
        };
        let index = aggregate_creators(&log);
        assert_eq!(index.len(), 2);
        let alice = index.get(1000).unwrap();
        assert_eq!(alice.name, "alice");
        assert_eq!(alice.paths.len(), 2);
        assert!(alice.paths.contains_key("/data/a"));
        let bob = index.get(2000).unwrap();
        assert_eq!(bob.paths.len(), 1);
        // Non-expired records contribute nothing.
        assert!(index.get(3000).is_none());
    }

    #[test]
    fn filters_non_attributable_owners() {
        let log = ScanLog {
            header: None,
            timing: None,
            records: vec![record(
                "/data/a",
                true,
                vec![owner("root", 0, 0), owner("svc", 500, 99), owner("dave", 4000, 4000)],
            )],
        };
        let index = aggregate_creators(&log);
        assert_eq!(index.len(), 1);
        assert!(index.get(4000).is_some());
    }
}
