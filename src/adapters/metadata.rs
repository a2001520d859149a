//! Metadata source seam over the stat accessor.
use std::path::Path;

use crate::fs;
use crate::types::errors::Result;
use crate::types::Entry;

/// Supplies entry snapshots to the walker. The default implementation
/// stats the real filesystem; tests substitute sources that fail on
/// demand to exercise the recoverable-failure paths (a mid-walk vanish
/// cannot be reproduced deterministically against a live tree).
pub trait MetadataSource: Send + Sync {
    /// Snapshot without following a final symlink.
    fn stat_entry(&self, path: &Path) -> Result<Entry>;
    /// Snapshot following symlinks.
    fn stat_target(&self, path: &Path) -> Result<Entry>;
}

/// Default source backed by the OS metadata calls in [`fs::meta`].
#[derive(Copy, Clone, Debug, Default)]
pub struct FsMetadataSource;

impl MetadataSource for FsMetadataSource {
    fn stat_entry(&self, path: &Path) -> Result<Entry> {
        fs::meta::stat_entry(path)
    }

    fn stat_target(&self, path: &Path) -> Result<Entry> {
        fs::meta::stat_target(path)
    }
}
