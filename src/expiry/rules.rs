//! Pure classification rules.
//!
//! Each function maps an entry snapshot (and, where relevant, already
//! computed child results) to an [`ExpiryResult`]. No I/O happens here;
//! the walker in [`super::classify`] supplies the snapshots. All merges
//! are commutative and associative, so child evaluation order never
//! affects the outcome.
use std::collections::BTreeSet;

use crate::policy::{Policy, SpecialFilePolicy, UnreadablePolicy};
use crate::types::{Entry, ExpiryResult, Owner, Timestamps};

/// Conjunctive staleness test: every considered timestamp must be strictly
/// older than the cutoff. A single recent access along any considered axis
/// keeps the entry alive.
#[must_use]
pub fn timestamps_expired(times: &Timestamps, cutoff: i64, include_atime: bool) -> bool {
    (!include_atime || times.atime < cutoff) && times.ctime < cutoff && times.mtime < cutoff
}

/// Result for a leaf entry: own owner, own timestamps, own size.
#[must_use]
pub fn leaf(entry: &Entry, owner: Owner, expired: bool) -> ExpiryResult {
    ExpiryResult {
        expired,
        owners: BTreeSet::from([owner]),
        times: entry.times,
        size: entry.size,
    }
}

/// A regular file is expired iff atime, ctime, and mtime are all older
/// than the cutoff.
#[must_use]
pub fn classify_file(entry: &Entry, owner: Owner, cutoff: i64) -> ExpiryResult {
    leaf(entry, owner, timestamps_expired(&entry.times, cutoff, true))
}

/// Special files classify per [`SpecialFilePolicy`].
#[must_use]
pub fn classify_special(entry: &Entry, owner: Owner, policy: &Policy, cutoff: i64) -> ExpiryResult {
    let expired = match policy.special_files {
        SpecialFilePolicy::AlwaysExpired => true,
        SpecialFilePolicy::ByTimestamps => timestamps_expired(&entry.times, cutoff, true),
    };
    leaf(entry, owner, expired)
}

/// A symlink is expired iff its own timestamps qualify AND the resolved
/// target is independently expired. `target` is `None` when the link is
/// unresolvable, which degrades to link-only evaluation (an explicit
/// fallback, not a failure). The target's owners and timestamps merge into
/// the result; its size does not, since the target is not storage under
/// the link.
#[must_use]
pub fn fold_symlink(
    link: &Entry,
    owner: Owner,
    target: Option<ExpiryResult>,
    cutoff: i64,
) -> ExpiryResult {
    let own_expired = timestamps_expired(&link.times, cutoff, true);
    let mut out = leaf(link, owner, own_expired);
    if let Some(target) = target {
        out.expired = own_expired && target.expired;
        out.owners.extend(target.owners);
        out.times = out.times.component_max(&target.times);
    }
    out
}

/// Fold a directory's own entry with its children's results.
///
/// Expired iff every child result is expired, no unreadable child blocks
/// it (per [`UnreadablePolicy`]), and the directory's own conjunction
/// holds — with its own atime excluded unless `check_folder_atime` is set.
/// An empty directory is vacuously expired iff its own timestamps qualify.
/// Owners union, timestamps component-max, sizes sum over self and
/// children.
#[must_use]
pub fn fold_directory(
    dir: &Entry,
    owner: Owner,
    children: Vec<ExpiryResult>,
    denied_children: usize,
    policy: &Policy,
    cutoff: i64,
) -> ExpiryResult {
    let own_expired = timestamps_expired(&dir.times, cutoff, policy.check_folder_atime);
    let denied_ok = denied_children == 0 || policy.unreadable == UnreadablePolicy::Expired;
    let mut out = ExpiryResult {
        expired: own_expired && denied_ok,
        owners: BTreeSet::from([owner]),
        times: dir.times,
        size: dir.size,
    };
    for child in children {
        out.expired = out.expired && child.expired;
        out.owners.extend(child.owners);
        out.times = out.times.component_max(&child.times);
        out.size += child.size;
    }
    out
}
