//! Validation error types for model configurations

use std::fmt;

use thiserror::Error;

/// A single violated constraint on one configuration field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Name of the offending field, as it appears in the configuration
    pub field: &'static str,

    /// Human-readable description of the violated constraint
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every constraint a configuration violates, collected in one pass
///
/// Never empty: a validation pass that finds nothing returns `Ok`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid model configuration: {}", describe(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations, in field declaration order
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|violation| violation.field)
    }

    /// Whether `field` is among the offending fields
    pub fn mentions(&self, field: &str) -> bool {
        self.fields().any(|name| name == field)
    }
}

/// A JSON document that cannot be read as a `ModelConfig`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigParseError {
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(String),

    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unknown field(s): {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    /// A known field holds a value of the wrong type
    #[error("invalid field value: {0}")]
    InvalidValue(String),
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
