//! Error taxonomy used across the engine.
//!
//! Recoverable per-entry failures (`NotFound`, `PermissionDenied`,
//! `BrokenLink`) are distinct variants so the classifier can match on them
//! and apply per-entry policy instead of aborting the walk. Fatal variants
//! (`RootNotFound`, `SourceNotFound`, `Cancelled`) abort an invocation
//! before any output is written.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or is not a directory. Fatal to a scan
    /// invocation; nothing is written.
    #[error("scan root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    /// An entry vanished between discovery and stat. Recoverable; the walk
    /// skips it and counts it in diagnostics.
    #[error("entry not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The caller lacks rights to stat or list an entry. Recoverable; how
    /// the entry counts toward its parent's expiry is a policy choice.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// A symlink whose target cannot be resolved. Recoverable; the link
    /// degrades to link-only evaluation.
    #[error("broken symlink: {}", .0.display())]
    BrokenLink(PathBuf),

    /// The scan log given to the creator aggregator does not exist. Fatal
    /// to a creator-aggregation invocation.
    #[error("scan log not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The cancellation flag was set; the walk stopped before descending
    /// into another directory.
    #[error("scan cancelled")]
    Cancelled,

    /// A line of a scan log did not parse as a known record shape.
    #[error("malformed record at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// JSON encoding failed while writing a log.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other I/O failure, tagged with the path it occurred on.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient alias for results returning the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
