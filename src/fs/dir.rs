//! Fd-based directory enumeration.
//!
//! Directories are opened with `O_NOATIME` where permitted so the scan does
//! not refresh the very atimes it is judging. `O_NOATIME` requires the
//! caller to own the directory; on `EPERM` the open is retried without it.
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use rustix::fd::OwnedFd;
use rustix::fs::{openat, Dir, Mode, OFlags, CWD};
use rustix::io::Errno;

use crate::types::errors::{Error, Result};

/// List the immediate children of `dir`, sorted by name for deterministic
/// downstream output. `.` and `..` are omitted.
pub fn read_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let fd = open_dir_noatime(dir)?;
    let entries = Dir::read_from(&fd).map_err(|e| errno_error(dir, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| errno_error(dir, e))?;
        let name = entry.file_name().to_bytes();
        if name == b"." || name == b".." {
            continue;
        }
        children.push(dir.join(std::ffi::OsStr::from_bytes(name)));
    }
    children.sort();
    Ok(children)
}

fn open_dir_noatime(dir: &Path) -> Result<OwnedFd> {
    let c = CString::new(dir.as_os_str().as_bytes())
        .map_err(|_| Error::NotFound(dir.to_path_buf()))?;
    let base = OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC;
    match openat(CWD, c.as_c_str(), base | OFlags::NOATIME, Mode::empty()) {
        Ok(fd) => Ok(fd),
        // O_NOATIME is owner-only; fall back to a plain open.
        Err(Errno::PERM) => {
            openat(CWD, c.as_c_str(), base, Mode::empty()).map_err(|e| errno_error(dir, e))
        }
        Err(e) => Err(errno_error(dir, e)),
    }
}

fn errno_error(path: &Path, e: Errno) -> Error {
    match e {
        Errno::NOENT => Error::NotFound(path.to_path_buf()),
        Errno::ACCESS => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::from_raw_os_error(e.raw_os_error()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_children_sorted_without_dot_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();
        let children = read_children(dir.path()).unwrap();
        let names: Vec<_> = children
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c"]);
    }

    #[test]
    fn missing_dir_is_not_found() {
        let err = read_children(Path::new("/nonexistent/definitely/missing")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
