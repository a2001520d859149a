//! Scan aggregator and the `Engine` facade.
//!
//! The engine wires policy, identity resolution, and cancellation into
//! classification passes, and rolls per-path results into a
//! [`ScanOutcome`] ready for the report writer. It performs no filesystem
//! mutation and no report I/O itself; [`crate::report`] is the single
//! boundary writer.
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::warn;
use serde_json::json;
use uuid::Uuid;

use crate::adapters::{FsMetadataSource, IdentityResolver, MetadataSource, PasswdResolver};
use crate::expiry::{ExpiryThreshold, Walker};
use crate::fs;
use crate::logging::FactsEmitter;
use crate::policy::Policy;
use crate::report;
use crate::types::errors::{Error, Result};
use crate::types::{
    CreatorIndex, Diagnostics, EntryKind, ExpiryResult, ReportRecord, ScanHeader, ScanTiming,
};

/// Everything one scan produced: the two header lines, the per-path
/// records in child-name order, and the recoverable-failure counters.
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    pub header: ScanHeader,
    pub timing: ScanTiming,
    pub records: Vec<ReportRecord>,
    pub diagnostics: Diagnostics,
}

impl ScanOutcome {
    /// Number of records classified expired.
    #[must_use]
    pub fn expired_count(&self) -> usize {
        self.records.iter().filter(|r| r.expired).count()
    }
}

/// The classification engine facade.
pub struct Engine<E: FactsEmitter> {
    facts: E,
    policy: Policy,
    identity: Box<dyn IdentityResolver>,
    metadata: Box<dyn MetadataSource>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<E: FactsEmitter> Engine<E> {
    /// Engine with the default passwd-backed identity resolver and
    /// OS-backed metadata source.
    pub fn new(facts: E, policy: Policy) -> Engine<E> {
        Engine {
            facts,
            policy,
            identity: Box::new(PasswdResolver),
            metadata: Box::new(FsMetadataSource),
            cancel: None,
        }
    }

    /// Replace the identity resolver (e.g. a cached or test resolver).
    #[must_use]
    pub fn with_identity_resolver(mut self, identity: Box<dyn IdentityResolver>) -> Self {
        self.identity = identity;
        self
    }

    /// Replace the metadata source (e.g. a fault-injecting test source).
    #[must_use]
    pub fn with_metadata_source(mut self, metadata: Box<dyn MetadataSource>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Install a cancellation flag, checked before descending into each
    /// directory. Setting it aborts the invocation with
    /// [`Error::Cancelled`].
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Classify a single entry and its subtree.
    pub fn classify(
        &self,
        path: &Path,
        threshold: ExpiryThreshold,
    ) -> Result<(ExpiryResult, Diagnostics)> {
        let mut diagnostics = Diagnostics::default();
        let mut walker = self.walker();
        let result = walker.classify_path(path, threshold.cutoff(), &mut diagnostics)?;
        Ok((result, diagnostics))
    }

    /// Scan the immediate children of `root` (not the root itself) and
    /// build one report record per child.
    ///
    /// Fails with [`Error::RootNotFound`] if `root` is missing or not a
    /// directory; nothing is produced in that case. Children that vanish
    /// or cannot be read between enumeration and classification are
    /// skipped with a warning and counted, never fatal.
    pub fn scan(&self, root: &Path, threshold: ExpiryThreshold) -> Result<ScanOutcome> {
        let started = Instant::now();
        let scrape_time = unix_now();
        let scan_id = Uuid::new_v4();
        let cutoff = threshold.cutoff();
        self.facts.emit(
            "scan",
            "scan.start",
            "proceed",
            json!({
                "scan_id": scan_id,
                "root": root.display().to_string(),
                "cutoff": cutoff,
            }),
        );

        let root_entry = self.metadata.stat_target(root).map_err(|e| match e {
            Error::NotFound(p) | Error::BrokenLink(p) => Error::RootNotFound(p),
            other => other,
        })?;
        if root_entry.kind != EntryKind::Directory {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }
        let children = fs::dir::read_children(root).map_err(|e| match e {
            Error::NotFound(p) => Error::RootNotFound(p),
            other => other,
        })?;

        let mut diagnostics = Diagnostics::default();
        let mut records = Vec::with_capacity(children.len());
        for child in &children {
            let mut walker = self.walker();
            match walker.classify_path(child, cutoff, &mut diagnostics) {
                Ok(result) => records.push(ReportRecord::build(child, &result, scrape_time)),
                Err(Error::NotFound(p)) => {
                    diagnostics.vanished += 1;
                    warn!("top-level entry vanished, skipping: {}", p.display());
                }
                Err(Error::PermissionDenied(p)) => {
                    diagnostics.denied += 1;
                    warn!("top-level entry unreadable, skipping: {}", p.display());
                }
                Err(e) => {
                    self.facts.emit(
                        "scan",
                        "scan.result",
                        "failure",
                        json!({ "scan_id": scan_id, "error": e.to_string() }),
                    );
                    return Err(e);
                }
            }
        }

        let outcome = ScanOutcome {
            header: ScanHeader::new(scan_id, scrape_time, Some(cutoff), &diagnostics),
            timing: ScanTiming::from_duration(started.elapsed()),
            records,
            diagnostics,
        };
        self.facts.emit(
            "scan",
            "scan.result",
            "success",
            json!({
                "scan_id": scan_id,
                "records": outcome.records.len(),
                "expired": outcome.expired_count(),
                "diagnostics": diagnostics,
                "duration_ms": started.elapsed().as_millis() as u64,
            }),
        );
        Ok(outcome)
    }

    /// Re-index a previously written scan log by owner, optionally
    /// writing the creator log to `dest`.
    ///
    /// Fails with [`Error::SourceNotFound`] if `source` does not exist.
    pub fn aggregate_creators(
        &self,
        source: &Path,
        dest: Option<&Path>,
        overwrite: bool,
    ) -> Result<CreatorIndex> {
        let started = Instant::now();
        let log = report::read_scan_log(source)
            .map_err(|e| self.creators_failure(source, e))?;
        let index = report::aggregate_creators(&log);
        if let Some(dest) = dest {
            let header = ScanHeader::new(Uuid::new_v4(), unix_now(), None, &Diagnostics::default());
            let timing = ScanTiming::from_duration(started.elapsed());
            report::write_creator_log(dest, &index, &header, &timing, overwrite)
                .map_err(|e| self.creators_failure(source, e))?;
        }
        self.facts.emit(
            "creators",
            "creators.result",
            "success",
            json!({
                "source": source.display().to_string(),
                "owners": index.len(),
            }),
        );
        Ok(index)
    }

    fn creators_failure(&self, source: &Path, e: Error) -> Error {
        self.facts.emit(
            "creators",
            "creators.result",
            "failure",
            json!({
                "source": source.display().to_string(),
                "error": e.to_string(),
            }),
        );
        e
    }

    fn walker(&self) -> Walker<'_> {
        Walker::new(
            &self.policy,
            self.identity.as_ref(),
            self.metadata.as_ref(),
            self.cancel.as_deref(),
        )
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
