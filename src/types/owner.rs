//! Owner identity attached to classified entries.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A resolved owner identity. Serialized in logs as a `[name, uid, gid]`
/// triple for compatibility with the established record format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u32, u32)", into = "(String, u32, u32)")]
pub struct Owner {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
}

impl Owner {
    /// Whether this owner is a real, attributable user. System identities
    /// (uid 0) and paths whose uid/gid disagree are excluded from creator
    /// rollups; the uid/gid mismatch is the signal for non-user-owned
    /// paths.
    #[must_use]
    pub fn is_attributable(&self) -> bool {
        self.uid > 0 && self.uid == self.gid
    }
}

// Ordered by uid first so owner sets iterate in stable uid order.
impl Ord for Owner {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.uid, self.gid, &self.name).cmp(&(other.uid, other.gid, &other.name))
    }
}

impl PartialOrd for Owner {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(String, u32, u32)> for Owner {
    fn from((name, uid, gid): (String, u32, u32)) -> Self {
        Owner { name, uid, gid }
    }
}

impl From<Owner> for (String, u32, u32) {
    fn from(o: Owner) -> Self {
        (o.name, o.uid, o.gid)
    }
}
