//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl core::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, malformed ids,
/// missing records). Transport and rendering concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A submitted form was rejected; every offending field is listed.
    #[error("form rejected: {}", join_violations(.0))]
    InvalidForm(Vec<FieldViolation>),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Violations carried by an [`DomainError::InvalidForm`] error (empty otherwise).
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::InvalidForm(v) => v,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_lists_every_field() {
        let err = DomainError::InvalidForm(vec![
            FieldViolation::new("evaluation_data", "must be a string"),
            FieldViolation::new("employee_id", "must be a string"),
        ]);

        assert_eq!(
            err.to_string(),
            "form rejected: evaluation_data: must be a string; employee_id: must be a string"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn non_form_errors_have_no_violations() {
        assert!(DomainError::not_found().violations().is_empty());
        assert_eq!(
            DomainError::validation("bad").to_string(),
            "validation failed: bad"
        );
    }
}
