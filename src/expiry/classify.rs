//! Recursive walk applying the pure rules to a real subtree.
//!
//! The walker owns no I/O handles beyond the current stat/listing call and
//! returns an immutable [`ExpiryResult`] per node; parents merge child
//! results. Recoverable per-entry failures never abort the walk: vanished
//! entries are skipped, denied entries count per policy, and both land in
//! [`Diagnostics`].
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::adapters::{IdentityResolver, MetadataSource};
use crate::fs;
use crate::policy::Policy;
use crate::types::errors::{Error, Result};
use crate::types::{Diagnostics, Entry, EntryKind, ExpiryResult, Owner};

use super::rules;

/// One classification pass over a subtree. Construct a fresh walker per
/// top-level entry; the visited set guards against symlink cycles within
/// that entry's walk.
pub struct Walker<'a> {
    policy: &'a Policy,
    identity: &'a dyn IdentityResolver,
    metadata: &'a dyn MetadataSource,
    cancel: Option<&'a AtomicBool>,
    visited: HashSet<(u64, u64)>,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub fn new(
        policy: &'a Policy,
        identity: &'a dyn IdentityResolver,
        metadata: &'a dyn MetadataSource,
        cancel: Option<&'a AtomicBool>,
    ) -> Walker<'a> {
        Walker {
            policy,
            identity,
            metadata,
            cancel,
            visited: HashSet::new(),
        }
    }

    /// Classify the entry at `path` and everything reachable under it.
    pub fn classify_path(
        &mut self,
        path: &Path,
        cutoff: i64,
        diagnostics: &mut Diagnostics,
    ) -> Result<ExpiryResult> {
        let entry = self.metadata.stat_entry(path)?;
        self.classify_entry(&entry, cutoff, diagnostics)
    }

    fn classify_entry(
        &mut self,
        entry: &Entry,
        cutoff: i64,
        diagnostics: &mut Diagnostics,
    ) -> Result<ExpiryResult> {
        let owner = self.identity.resolve(entry.uid, entry.gid);
        match entry.kind {
            EntryKind::File => Ok(rules::classify_file(entry, owner, cutoff)),
            EntryKind::Special => Ok(rules::classify_special(entry, owner, self.policy, cutoff)),
            EntryKind::Symlink => self.classify_symlink(entry, owner, cutoff, diagnostics),
            EntryKind::Directory => self.classify_directory(entry, owner, cutoff, diagnostics),
        }
    }

    fn classify_symlink(
        &mut self,
        link: &Entry,
        owner: Owner,
        cutoff: i64,
        diagnostics: &mut Diagnostics,
    ) -> Result<ExpiryResult> {
        match self.metadata.stat_target(&link.path) {
            Ok(target) => {
                let target_result = self.classify_entry(&target, cutoff, diagnostics)?;
                Ok(rules::fold_symlink(link, owner, Some(target_result), cutoff))
            }
            Err(Error::BrokenLink(_)) => {
                diagnostics.broken_links += 1;
                Ok(rules::fold_symlink(link, owner, None, cutoff))
            }
            Err(Error::PermissionDenied(p)) => {
                // Target unreadable: degrade like a broken link, but book
                // it under denied.
                diagnostics.denied += 1;
                warn!("cannot resolve symlink target: {}", p.display());
                Ok(rules::fold_symlink(link, owner, None, cutoff))
            }
            Err(e) => Err(e),
        }
    }

    fn classify_directory(
        &mut self,
        dir: &Entry,
        owner: Owner,
        cutoff: i64,
        diagnostics: &mut Diagnostics,
    ) -> Result<ExpiryResult> {
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
        }
        // Symlink cycle guard: a directory already walked in this pass
        // contributes its own entry only.
        if !self.visited.insert((dir.dev, dir.ino)) {
            return Ok(rules::fold_directory(dir, owner, Vec::new(), 0, self.policy, cutoff));
        }

        let children = match fs::dir::read_children(&dir.path) {
            Ok(children) => children,
            Err(Error::PermissionDenied(p)) => {
                diagnostics.denied += 1;
                warn!("cannot list directory: {}", p.display());
                return Ok(rules::fold_directory(dir, owner, Vec::new(), 1, self.policy, cutoff));
            }
            Err(Error::NotFound(p)) => {
                diagnostics.vanished += 1;
                warn!("directory vanished during walk: {}", p.display());
                return Ok(rules::fold_directory(dir, owner, Vec::new(), 0, self.policy, cutoff));
            }
            Err(e) => return Err(e),
        };

        let mut results = Vec::with_capacity(children.len());
        let mut denied_children = 0;
        for child in &children {
            match self.classify_path(child, cutoff, diagnostics) {
                Ok(result) => results.push(result),
                Err(Error::NotFound(p)) => {
                    diagnostics.vanished += 1;
                    warn!("entry vanished during walk: {}", p.display());
                }
                Err(Error::PermissionDenied(p)) => {
                    diagnostics.denied += 1;
                    denied_children += 1;
                    warn!("cannot read entry: {}", p.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(rules::fold_directory(dir, owner, results, denied_children, self.policy, cutoff))
    }
}
