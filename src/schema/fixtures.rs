//! Shared test documents.

use serde_json::Value;

/// The bundled sample profile, which exercises every section.
pub(crate) fn sample_document() -> Value {
    serde_json::from_str(include_str!("../../content/profile.json"))
        .expect("bundled sample profile is valid JSON")
}
