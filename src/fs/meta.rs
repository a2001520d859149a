//! Metadata accessor: one stat call, one immutable [`Entry`] snapshot.
//!
//! Two probes are exposed:
//! - [`stat_entry`] does not follow symlinks, so a link yields its own
//!   metadata (the link's timestamps, not the target's).
//! - [`stat_target`] follows symlinks; a dangling or cyclic link maps to
//!   [`Error::BrokenLink`] so the classifier can degrade to link-only
//!   evaluation instead of failing the walk.
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::types::errors::{Error, Result};
use crate::types::{Entry, EntryKind, Timestamps};

/// Snapshot the node at `path` without following a final symlink.
pub fn stat_entry(path: &Path) -> Result<Entry> {
    let md = std::fs::symlink_metadata(path).map_err(|e| map_io(path, e))?;
    Ok(entry_from(path, &md))
}

/// Snapshot the node at `path`, following symlinks. A target that does not
/// exist (or loops back into itself) is reported as [`Error::BrokenLink`].
pub fn stat_target(path: &Path) -> Result<Entry> {
    match std::fs::metadata(path) {
        Ok(md) => Ok(entry_from(path, &md)),
        Err(e)
            if e.kind() == std::io::ErrorKind::NotFound
                || e.raw_os_error() == Some(libc::ELOOP) =>
        {
            Err(Error::BrokenLink(path.to_path_buf()))
        }
        Err(e) => Err(map_io(path, e)),
    }
}

fn entry_from(path: &Path, md: &Metadata) -> Entry {
    let ft = md.file_type();
    let kind = if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_dir() {
        EntryKind::Directory
    } else if ft.is_file() {
        EntryKind::File
    } else {
        EntryKind::Special
    };
    Entry {
        path: path.to_path_buf(),
        kind,
        times: Timestamps {
            atime: md.atime(),
            ctime: md.ctime(),
            mtime: md.mtime(),
        },
        size: md.size(),
        uid: md.uid(),
        gid: md.gid(),
        dev: md.dev(),
        ino: md.ino(),
    }
}

pub(crate) fn map_io(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
