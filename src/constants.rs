//! Shared crate-wide constants.
//!
//! Centralizes magic values used across modules; adjusting these here
//! propagates through the crate.

/// Seconds in a day, used to convert an expiry window in days to an
/// absolute cutoff and to derive `days_unused` in folder statistics.
pub const SECS_PER_DAY: i64 = 86_400;

/// Bytes per megabyte for the `size_mb` field of folder statistics.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Schema version carried in every log header and fact envelope. Readers
/// select line types by key presence, so bumping this does not break older
/// consumers that ignore unknown keys.
pub const SCHEMA_VERSION: i64 = 1;

/// Fallback rendering for timestamps that fall outside the representable
/// datetime range.
pub const DATETIME_ZERO: &str = "1970-01-01 00:00:00";
