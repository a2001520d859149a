pub mod facts;

pub use facts::{FactsEmitter, JsonlSink, NullEmitter};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Current wall-clock time as an RFC 3339 string for fact envelopes.
#[must_use]
pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
