//! Structured facts emitted around engine invocations.
//!
//! Facts carry a minimal envelope (`schema_version`, `ts`, `subsystem`,
//! `event`, `decision`) plus event-specific fields. They describe what the
//! engine did, never the scanned data itself; the scan logs are the data
//! channel.
use std::io::Write;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::constants::SCHEMA_VERSION;

use super::now_iso;

/// Sink for structured engine facts.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Discards all facts. Useful for callers that only want the return
/// values.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullEmitter;

impl FactsEmitter for NullEmitter {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

/// Writes one JSON object per fact to the wrapped writer.
pub struct JsonlSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonlSink<W> {
    pub fn new(out: W) -> Self {
        JsonlSink { out: Mutex::new(out) }
    }
}

impl<W: Write + Send> FactsEmitter for JsonlSink<W> {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        let mut envelope = json!({
            "schema_version": SCHEMA_VERSION,
            "ts": now_iso(),
            "subsystem": subsystem,
            "event": event,
            "decision": decision,
        });
        if let (Some(env), Some(extra)) = (envelope.as_object_mut(), fields.as_object()) {
            for (k, v) in extra {
                env.insert(k.clone(), v.clone());
            }
        }
        if let Ok(mut out) = self.out.lock() {
            // A failed fact write must never fail the invocation.
            let _ = writeln!(out, "{envelope}");
        }
    }
}
