//! Observability
//!
//! Structured JSON logs for validation and render runs.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. Logging never changes a command's result
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at.
pub fn severity_for(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Error
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
