//! Shared helpers for file-expiry integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use file_expiry::adapters::IdentityResolver;
use file_expiry::constants::SECS_PER_DAY;
use file_expiry::logging::FactsEmitter;
use file_expiry::types::Owner;
use file_expiry::{Engine, ExpiryThreshold, Policy};

/// In-memory emitter capturing facts for assertions.
#[derive(Clone, Default)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// Deterministic resolver: every uid maps to `user<uid>`.
#[derive(Copy, Clone, Default)]
pub struct StaticResolver;

impl IdentityResolver for StaticResolver {
    fn resolve(&self, uid: u32, gid: u32) -> Owner {
        Owner { name: format!("user{uid}"), uid, gid }
    }
}

pub fn engine(policy: Policy) -> Engine<TestEmitter> {
    Engine::new(TestEmitter::default(), policy).with_identity_resolver(Box::new(StaticResolver))
}

pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Cutoff one day in the future: every existing timestamp qualifies as
/// stale, so freshly created trees classify expired.
pub fn future_cutoff() -> ExpiryThreshold {
    ExpiryThreshold::at(unix_now() + SECS_PER_DAY)
}

/// Cutoff one day in the past: freshly created trees are not expired.
pub fn past_cutoff() -> ExpiryThreshold {
    ExpiryThreshold::at(unix_now() - SECS_PER_DAY)
}
