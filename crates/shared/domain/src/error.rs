//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (CLI, database).

use std::fmt;

use thiserror::Error;

/// Which value object rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    Id,
    Name,
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationField::Id => write!(f, "user id"),
            ValidationField::Name => write!(f, "user name"),
        }
    }
}

/// Why a value object rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    TooShort { min: usize },
    TooLong { max: usize },
    Malformed,
}

/// Value object construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.field, .kind))]
pub struct ValidationError {
    pub field: ValidationField,
    pub kind: ValidationKind,
}

fn describe(field: &ValidationField, kind: &ValidationKind) -> String {
    match *kind {
        ValidationKind::TooShort { min } => format!("{field} must be at least {min} characters"),
        ValidationKind::TooLong { max } => format!("{field} must be at most {max} characters"),
        ValidationKind::Malformed => format!("{field} is malformed"),
    }
}

impl ValidationError {
    /// Create a validation error for the given field
    pub fn new(field: ValidationField, kind: ValidationKind) -> Self {
        Self { field, kind }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another user already holds the name
    #[error("user name {0} already exists")]
    DuplicateName(String),
}

impl DomainError {
    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        DomainError::DuplicateName(name.into())
    }
}
