//! Immutable metadata snapshot of a single filesystem node.
use std::path::PathBuf;

/// Type discriminant for an entry, read from metadata rather than probed by
/// trial and error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Character/block devices, FIFOs, and sockets.
    Special,
}

/// The access/change/modify timestamp triple, in unix seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timestamps {
    pub atime: i64,
    pub ctime: i64,
    pub mtime: i64,
}

impl Timestamps {
    /// Component-wise maximum: latest atime, latest ctime, latest mtime.
    /// Commutative and associative, so subtree aggregation is
    /// order-independent.
    #[must_use]
    pub fn component_max(&self, other: &Timestamps) -> Timestamps {
        Timestamps {
            atime: self.atime.max(other.atime),
            ctime: self.ctime.max(other.ctime),
            mtime: self.mtime.max(other.mtime),
        }
    }

    /// The most recent activity along any axis.
    #[must_use]
    pub fn latest(&self) -> i64 {
        self.atime.max(self.ctime).max(self.mtime)
    }
}

/// Snapshot of one filesystem node at classification time. Re-reading the
/// same path later may yield a different `Entry`; nothing is cached across
/// calls.
#[derive(Clone, Debug)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub times: Timestamps,
    pub size: u64,
    pub uid: u32,
    pub gid: u32,
    /// Device/inode pair, used to guard directory recursion against
    /// symlink cycles.
    pub dev: u64,
    pub ino: u64,
}
