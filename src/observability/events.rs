//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in a validate or render run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Inputs
    /// Configuration loaded
    ConfigLoaded,
    /// Content document read from disk
    ContentLoaded,

    // Validation
    ValidationStart,
    ValidationPassed,
    /// Document rejected
    ValidationFailed,
    /// One violation, logged once per violation
    ViolationReported,
    /// Non-fatal schema warning
    ValidationWarning,

    // Rendering
    RenderStart,
    RenderComplete,
    /// Footer fell back to the minimal branch
    MetaFallback,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ContentLoaded => "CONTENT_LOADED",
            Event::ValidationStart => "VALIDATION_START",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationFailed => "VALIDATION_FAILED",
            Event::ViolationReported => "VIOLATION_REPORTED",
            Event::ValidationWarning => "VALIDATION_WARNING",
            Event::RenderStart => "RENDER_START",
            Event::RenderComplete => "RENDER_COMPLETE",
            Event::MetaFallback => "META_FALLBACK",
        }
    }

    /// Events that signal a problem with the content.
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ValidationFailed | Event::ViolationReported)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Event::ValidationWarning | Event::MetaFallback)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [
            Event::ConfigLoaded,
            Event::ValidationFailed,
            Event::RenderComplete,
            Event::MetaFallback,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{}", name);
        }
    }

    #[test]
    fn test_failure_and_warning_classes() {
        assert!(Event::ViolationReported.is_failure());
        assert!(!Event::ValidationPassed.is_failure());
        assert!(Event::MetaFallback.is_warning());
    }
}
