//! Schema violation and error types
//!
//! Violation codes:
//! - FOLIO_MISSING_FIELD
//! - FOLIO_TYPE_MISMATCH
//! - FOLIO_INVALID_URL
//! - FOLIO_CARDINALITY
//! - FOLIO_OUT_OF_RANGE
//! - FOLIO_INVALID_ENUM
//! - FOLIO_INVALID_TIMESTAMP
//! - FOLIO_DUPLICATE_ID
//! - FOLIO_UNKNOWN_FIELD
//! - FOLIO_CROSS_FIELD

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Path used for violations that belong to the whole document.
pub const ROOT_PATH: &str = "$root";

/// Category of a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    /// Required field absent
    MissingField,
    /// Field present with the wrong JSON type
    TypeMismatch,
    /// URL field that is not an acceptable absolute URI
    InvalidUrl,
    /// Array length outside its allowed range
    Cardinality,
    /// Number outside its allowed range or not an integer
    OutOfRange,
    /// String not in a closed literal set
    InvalidEnum,
    /// Timestamp that is not ISO-8601
    InvalidTimestamp,
    /// Key repeated where it must be unique
    DuplicateId,
    /// Undeclared key (strict mode only)
    UnknownField,
    /// Rule spanning several fields
    CrossField,
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "FOLIO_MISSING_FIELD",
            ViolationKind::TypeMismatch => "FOLIO_TYPE_MISMATCH",
            ViolationKind::InvalidUrl => "FOLIO_INVALID_URL",
            ViolationKind::Cardinality => "FOLIO_CARDINALITY",
            ViolationKind::OutOfRange => "FOLIO_OUT_OF_RANGE",
            ViolationKind::InvalidEnum => "FOLIO_INVALID_ENUM",
            ViolationKind::InvalidTimestamp => "FOLIO_INVALID_TIMESTAMP",
            ViolationKind::DuplicateId => "FOLIO_DUPLICATE_ID",
            ViolationKind::UnknownField => "FOLIO_UNKNOWN_FIELD",
            ViolationKind::CrossField => "FOLIO_CROSS_FIELD",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One rule broken at one place in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path (e.g., "hero.impactStats[1].value")
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::MissingField, "required field is missing")
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(
            path,
            ViolationKind::TypeMismatch,
            format!("expected {}, got {}", expected, actual),
        )
    }

    pub fn cardinality(path: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        let message = if actual > max {
            format!("at most {} entries allowed, got {}", max, actual)
        } else {
            format!("at least {} entries required, got {}", min, actual)
        };
        Self::new(path, ViolationKind::Cardinality, message)
    }

    pub fn invalid_enum(path: impl Into<String>, value: &str, allowed: &str) -> Self {
        Self::new(
            path,
            ViolationKind::InvalidEnum,
            format!("'{}' is not one of: {}", value, allowed),
        )
    }

    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::UnknownField, "undeclared field")
    }

    /// Document-level violation, not attributable to one field.
    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::new(ROOT_PATH, ViolationKind::CrossField, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.path, self.message, self.kind.code())
    }
}

/// Every violation found in one validation pass, in document order.
///
/// Warnings never make a document invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

/// Errors produced while turning a content file into a `Profile`.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("profile failed validation: {0}")]
    Invalid(ValidationReport),

    #[error("malformed content file '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("cannot read content file '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl SchemaError {
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::Invalid(_) => "FOLIO_SCHEMA_VALIDATION_FAILED",
            SchemaError::Malformed { .. } => "FOLIO_SCHEMA_MALFORMED",
            SchemaError::Io { .. } => "FOLIO_SCHEMA_IO",
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            SchemaError::Invalid(report) => Some(report),
            _ => None,
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_codes_are_stable() {
        assert_eq!(ViolationKind::MissingField.code(), "FOLIO_MISSING_FIELD");
        assert_eq!(ViolationKind::Cardinality.code(), "FOLIO_CARDINALITY");
        assert_eq!(ViolationKind::CrossField.code(), "FOLIO_CROSS_FIELD");
    }

    #[test]
    fn test_cardinality_message_names_bound() {
        let too_many = Violation::cardinality("philosophy", 2, 4, 5);
        assert!(too_many.message.contains("at most 4"));

        let too_few = Violation::cardinality("philosophy", 2, 4, 1);
        assert!(too_few.message.contains("at least 2"));
    }

    #[test]
    fn test_violation_display_includes_path_and_code() {
        let v = Violation::missing_field("hero.name");
        let display = v.to_string();
        assert!(display.starts_with("hero.name: "));
        assert!(display.contains("FOLIO_MISSING_FIELD"));
    }

    #[test]
    fn test_cross_field_uses_root_path() {
        let v = Violation::cross_field("roots or education required");
        assert_eq!(v.path, ROOT_PATH);
    }

    #[test]
    fn test_report_warnings_do_not_invalidate() {
        let mut report = ValidationReport::new();
        report.warn("partial meta");
        assert!(report.is_valid());
        report.push(Violation::missing_field("hero"));
        assert!(!report.is_valid());
        assert_eq!(report.at("hero").count(), 1);
    }

    #[test]
    fn test_schema_error_exposes_report() {
        let mut report = ValidationReport::new();
        report.push(Violation::missing_field("meta"));
        let err = SchemaError::Invalid(report);
        assert_eq!(err.code(), "FOLIO_SCHEMA_VALIDATION_FAILED");
        assert_eq!(err.report().map(|r| r.len()), Some(1));
        assert!(err.to_string().contains("meta: required field is missing"));
    }
}
