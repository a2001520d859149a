#![forbid(unsafe_code)]
//! file-expiry: classify filesystem trees as "expired" and attribute the
//! expired storage to the users who own it.
//!
//! The engine is read-only with respect to the scanned tree. It classifies
//! each entry by its access/change/modify timestamps against an absolute
//! cutoff, composes directory expiry from children (a directory is expired
//! only when everything reachable under it is), and rolls the result up into
//! JSON-Lines reports that downstream cleanup tooling consumes. Deletion,
//! notification, and scheduling are external collaborators; nothing here
//! mutates the tree.
//!
//! Entry points:
//! - [`Engine::scan`] walks the immediate children of a root directory and
//!   produces one [`types::ReportRecord`] per child.
//! - [`report::write_scan_log`] / [`report::read_scan_log`] persist and
//!   reload a scan as JSON Lines.
//! - [`Engine::aggregate_creators`] re-indexes a written log by owner.

pub mod adapters;
pub mod constants;
pub mod expiry;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod report;
pub mod scan;
pub mod types;

pub use expiry::ExpiryThreshold;
pub use policy::Policy;
pub use scan::{Engine, ScanOutcome};
pub use types::errors::{Error, Result};
