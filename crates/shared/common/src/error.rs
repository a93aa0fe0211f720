//! Unified error handling for the user use cases.
//!
//! Provides:
//! - [`AppError`], the kind of failure (validation, duplicate, missing, storage)
//! - [`RepositoryError`], one variant per repository operation
//! - [`OperationError`], the failure of a whole use case with its input

use std::fmt;

use domain::{DomainError, ValidationError};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Resource errors
    #[error("user name {0} already exists")]
    DuplicateName(String),

    #[error("user {0} not found")]
    NotFound(String),

    // Storage
    #[cfg(feature = "database")]
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateName(_) => "DUPLICATE_NAME",
            AppError::NotFound(_) => "NOT_FOUND",
            #[cfg(feature = "database")]
            AppError::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        AppError::DuplicateName(name.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        AppError::NotFound(id.into())
    }
}

// =============================================================================
// Repository Errors
// =============================================================================

/// Storage failure, tagged with the repository operation that hit it.
#[cfg(feature = "database")]
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("failed to find user by name {name}")]
    FindByName {
        name: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("failed to find user by id {id}")]
    FindById {
        id: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("failed to save user {name}")]
    Save {
        name: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("failed to update user {id}")]
    Update {
        id: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("failed to delete user {id}")]
    Delete {
        id: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

// =============================================================================
// Use Case Errors
// =============================================================================

/// Use case that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Get,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Register => write!(f, "register"),
            Operation::Get => write!(f, "get"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Failure of a use case, carrying the input it was invoked with.
#[derive(Error, Debug)]
#[error("{operation} {input:?} failed: {cause}")]
pub struct OperationError {
    pub operation: Operation,
    pub input: String,
    #[source]
    pub cause: AppError,
}

impl OperationError {
    pub fn new(operation: Operation, input: impl Into<String>, cause: impl Into<AppError>) -> Self {
        Self {
            operation,
            input: input.into(),
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &AppError {
        &self.cause
    }

    pub fn code(&self) -> &'static str {
        self.cause.code()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::Validation(e),
            DomainError::DuplicateName(name) => AppError::DuplicateName(name),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(id))
    }
}
