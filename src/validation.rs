//! Field-level validation shared by every record type.
//!
//! Validators collect every violation instead of stopping at the first one, so a
//! rejected request reports all offending fields at once.

use serde::Serialize;
use std::fmt;

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found while validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// True when the value contains at least one non-whitespace character.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Records a violation unless `ok` holds.
    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    /// Non-blank text of at most `max` characters.
    pub fn require_text(&mut self, field: &'static str, value: &str, max: usize) {
        if !has_text(value) {
            self.push(field, "must not be blank");
        } else {
            self.max_chars(field, value, max);
        }
    }

    pub fn max_chars(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("size must be between 1 and {max}"));
        }
    }

    pub fn require_present<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.push(field, "must not be null");
        }
    }

    /// Appends the violations of `other` for fields not already reported.
    pub fn absorb(&mut self, other: Result<(), ValidationErrors>) {
        if let Err(other) = other {
            for violation in other.violations {
                if !self.has_field(violation.field) {
                    self.violations.push(violation);
                }
            }
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
