//! Creator aggregation over written logs.
mod common;

use std::path::PathBuf;

use common::{engine, unix_now, TestEmitter};
use file_expiry::report::{read_scan_log, write_scan_log};
use file_expiry::types::{
    Diagnostics, FolderStats, Owner, ReportRecord, ScanHeader, ScanTiming, Timestamps,
};
use file_expiry::{Error, Policy, ScanOutcome};

fn owner(name: &str, uid: u32, gid: u32) -> Owner {
    Owner { name: name.into(), uid, gid }
}

fn record(path: &str, expired: bool, creators: Vec<Owner>) -> ReportRecord {
    let now = unix_now();
    let times = Timestamps { atime: now, ctime: now, mtime: now };
    ReportRecord {
        path: PathBuf::from(path),
        creators,
        expired,
        folder_stats: FolderStats::derive(&times, 42, now),
    }
}

fn outcome(records: Vec<ReportRecord>) -> ScanOutcome {
    let diagnostics = Diagnostics::default();
    ScanOutcome {
        header: ScanHeader::new(uuid::Uuid::new_v4(), unix_now(), Some(0), &diagnostics),
        timing: ScanTiming::from_duration(std::time::Duration::from_millis(120)),
        records,
        diagnostics,
    }
}

#[test]
fn aggregates_owners_across_records_and_writes_a_creator_log() {
    let dir = tempfile::tempdir().unwrap();
    let scan_log = dir.path().join("scan.jsonl");
    let creator_log = dir.path().join("creators.jsonl");
    write_scan_log(
        &scan_log,
        &outcome(vec![
            record("/data/proj1", true, vec![owner("alice", 1000, 1000)]),
            record(
                "/data/proj2",
                true,
                vec![owner("alice", 1000, 1000), owner("bob", 2000, 2000)],
            ),
            record("/data/live", false, vec![owner("bob", 2000, 2000)]),
        ]),
        true,
    )
    .unwrap();

    let eng = engine(Policy::default());
    let index = eng
        .aggregate_creators(&scan_log, Some(&creator_log), true)
        .unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(1000).unwrap().paths.len(), 2);
    assert_eq!(index.get(2000).unwrap().paths.len(), 1);

    // The written creator log: header, timing, then one line per owner.
    let body = std::fs::read_to_string(&creator_log).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("scrape_time"));
    assert!(lines[1].contains("time_for_scrape_sec"));
    let alice: file_expiry::types::CreatorRecord = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(alice.name, "alice");
    assert_eq!(alice.uid, 1000);
    assert!(alice.paths.contains_key("/data/proj1"));
}

#[test]
fn owners_serialize_as_triples_in_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let scan_log = dir.path().join("scan.jsonl");
    write_scan_log(
        &scan_log,
        &outcome(vec![record("/data/p", true, vec![owner("alice", 1000, 1000)])]),
        true,
    )
    .unwrap();
    let body = std::fs::read_to_string(&scan_log).unwrap();
    assert!(body.contains(r#""creators":[["alice",1000,1000]]"#));
}

#[test]
fn parses_lines_by_key_presence_not_position() {
    let dir = tempfile::tempdir().unwrap();
    let scan_log = dir.path().join("scan.jsonl");
    let out = outcome(vec![record("/data/p", true, vec![owner("alice", 1000, 1000)])]);
    // Record first, header last: still parses.
    let mut shuffled = String::new();
    shuffled.push_str(&serde_json::to_string(&out.records[0]).unwrap());
    shuffled.push('\n');
    shuffled.push_str(&serde_json::to_string(&out.timing).unwrap());
    shuffled.push('\n');
    shuffled.push_str(&serde_json::to_string(&out.header).unwrap());
    shuffled.push('\n');
    std::fs::write(&scan_log, shuffled).unwrap();

    let log = read_scan_log(&scan_log).unwrap();
    assert!(log.header.is_some());
    assert!(log.timing.is_some());
    assert_eq!(log.records.len(), 1);

    let eng = engine(Policy::default());
    let index = eng.aggregate_creators(&scan_log, None, true).unwrap();
    assert_eq!(index.len(), 1);
}

#[test]
fn headerless_log_still_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let scan_log = dir.path().join("scan.jsonl");
    let rec = record("/data/p", true, vec![owner("alice", 1000, 1000)]);
    std::fs::write(
        &scan_log,
        format!("{}\n", serde_json::to_string(&rec).unwrap()),
    )
    .unwrap();
    let eng = engine(Policy::default());
    let index = eng.aggregate_creators(&scan_log, None, true).unwrap();
    assert_eq!(index.get(1000).unwrap().paths.len(), 1);
}

#[test]
fn missing_source_is_fatal_and_writes_no_log() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.jsonl");
    let dest = dir.path().join("creators.jsonl");
    let emitter = TestEmitter::default();
    let eng = file_expiry::Engine::new(emitter.clone(), Policy::default());
    let err = eng
        .aggregate_creators(&missing, Some(&dest), true)
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
    assert!(!dest.exists());
    // The failure is still visible as a fact, mirroring scan.result.
    let events = emitter.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let (subsystem, event, decision, fields) = &events[0];
    assert_eq!(
        (subsystem.as_str(), event.as_str(), decision.as_str()),
        ("creators", "creators.result", "failure")
    );
    assert!(fields["error"].as_str().unwrap().contains("not found"));
}
