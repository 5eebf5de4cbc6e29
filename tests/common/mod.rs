//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

/// The bundled sample profile; valid, legacy meta, education entries.
pub fn sample_document() -> Value {
    serde_json::from_str(include_str!("../../content/profile.json"))
        .expect("sample content is valid JSON")
}

pub fn roots() -> Value {
    json!({
        "degree": "BSc Computer Science",
        "institution": "University of Porto",
        "focus": "Distributed systems",
        "transferableInsight": "Every system is a distributed system eventually"
    })
}

/// Sample document with `roots` instead of `education`.
pub fn roots_only_document() -> Value {
    let mut doc = sample_document();
    let obj = doc.as_object_mut().unwrap();
    obj.remove("education");
    obj.insert("roots".into(), roots());
    doc
}

/// Sample document with all four enhanced meta fields.
pub fn enhanced_document() -> Value {
    let mut doc = sample_document();
    let meta = doc["meta"].as_object_mut().unwrap();
    meta.insert(
        "gasTown".into(),
        json!({"name": "Portfolio Town", "mayor": "planner"}),
    );
    meta.insert(
        "polecats".into(),
        json!([{"name": "scribe", "task": "copy edits"}]),
    );
    meta.insert(
        "timeline".into(),
        json!([{"at": "09:00", "event": "convoy dispatched"}]),
    );
    meta.insert("stats".into(), json!({"commits": 42, "agents": "3"}));
    doc
}

pub fn impact_stat(id: &str, value: &str) -> Value {
    json!({
        "id": id,
        "value": value,
        "unit": "units",
        "label": format!("Stat {}", id),
        "detail": "detail"
    })
}

pub fn philosophy(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Belief {}", id),
        "belief": "Small, reversible changes."
    })
}

/// Writes `document` to `profile.json` in a fresh temp dir.
pub fn write_content(document: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(&path, document.to_string()).unwrap();
    (dir, path)
}
