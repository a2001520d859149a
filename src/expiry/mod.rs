//! The expiry classification engine.
//!
//! [`rules`] holds the pure decision logic over entry snapshots and child
//! results; [`classify`] drives it recursively over a real subtree. The
//! split keeps every policy decision unit-testable without a filesystem.

pub mod classify;
pub mod rules;

pub use classify::Walker;

use crate::constants::SECS_PER_DAY;

/// Absolute expiry cutoff in unix seconds. Entries whose considered
/// timestamps are all strictly older than the cutoff are expired.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExpiryThreshold(i64);

impl ExpiryThreshold {
    /// Cutoff at an absolute unix timestamp.
    #[must_use]
    pub const fn at(cutoff_secs: i64) -> ExpiryThreshold {
        ExpiryThreshold(cutoff_secs)
    }

    /// Cutoff `days` before `now`: activity older than the window expires.
    #[must_use]
    pub const fn days_before(now: i64, days: u32) -> ExpiryThreshold {
        ExpiryThreshold(now - days as i64 * SECS_PER_DAY)
    }

    #[must_use]
    pub const fn cutoff(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_converts_to_absolute_cutoff() {
        let t = ExpiryThreshold::days_before(100 * SECS_PER_DAY, 30);
        assert_eq!(t.cutoff(), 70 * SECS_PER_DAY);
        assert_eq!(ExpiryThreshold::at(42).cutoff(), 42);
    }
}
