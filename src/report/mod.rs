//! The single I/O boundary for scan and creator logs.
//!
//! Classification components produce values; this module is the only
//! place that reads or writes report files. Logs are JSON Lines: two
//! header lines (scan metadata, scan timing) then one record per line.

pub mod creators;
pub mod reader;
pub mod writer;

pub use creators::aggregate_creators;
pub use reader::read_scan_log;
pub use writer::{write_creator_log, write_scan_log};
