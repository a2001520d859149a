//! Classification output types.
use std::collections::BTreeSet;

use serde::Serialize;

use super::entry::Timestamps;
use super::owner::Owner;

/// Result of classifying one entry (and, for directories, the whole
/// subtree under it). Immutable per node; parents merge child results.
#[derive(Clone, Debug)]
pub struct ExpiryResult {
    /// For directories: true iff every reachable descendant is
    /// independently expired and the directory's own timestamps qualify.
    pub expired: bool,
    /// Union of the entry's own owner and all descendant owners,
    /// deduplicated. Unfiltered at this layer; the report layer applies
    /// the attribution filter.
    pub owners: BTreeSet<Owner>,
    /// Component-wise maximum of the timestamp triple across the entry
    /// and all descendants.
    pub times: Timestamps,
    /// Own size for leaves; cumulative subtree size for directories.
    pub size: u64,
}

/// Per-invocation counters for recoverable failures. Never aborts a scan;
/// surfaced in the scan summary and the log header so callers can judge
/// completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Entries that vanished between discovery and stat.
    pub vanished: u64,
    /// Entries or listings the caller had no rights to read.
    pub denied: u64,
    /// Symlinks whose target could not be resolved.
    pub broken_links: u64,
}

impl Diagnostics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Diagnostics::default()
    }
}
