//! Policy knobs governing classification.
//!
//! Every knob has an explicit, documented default. The two edge-case
//! policies exist because the underlying behavior is a judgment call, not a
//! law: they are named choices an operator can override rather than
//! hard-coded constants.

/// How special files (character/block devices, FIFOs, sockets) classify.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialFilePolicy {
    /// Always classify expired. No activity timestamps are trusted for
    /// device nodes, so an actively-used device is indistinguishable from
    /// an idle one under this policy.
    AlwaysExpired,
    /// Apply the same conjunctive timestamp test as regular files.
    ByTimestamps,
}

/// How an entry the scan cannot read counts toward its parent's expiry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Unknown is not expired: a denied child keeps its parent alive.
    /// Conservative; avoids false-positive deletions downstream.
    NotExpired,
    /// A denied child counts as expired.
    Expired,
}

/// Classification policy for one engine instance.
#[derive(Copy, Clone, Debug)]
pub struct Policy {
    /// Whether a directory's own atime participates in its expiry
    /// conjunction. Directory atimes refresh on a mere listing, so the
    /// default excludes them from the test; the atime is still tracked in
    /// the aggregated triple for reporting.
    pub check_folder_atime: bool,
    /// Default: [`SpecialFilePolicy::AlwaysExpired`].
    pub special_files: SpecialFilePolicy,
    /// Default: [`UnreadablePolicy::NotExpired`].
    pub unreadable: UnreadablePolicy,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            check_folder_atime: false,
            special_files: SpecialFilePolicy::AlwaysExpired,
            unreadable: UnreadablePolicy::NotExpired,
        }
    }
}
