//! Common types shared by the user crates.
//!
//! This crate provides:
//! - Unified error handling for use cases and repositories
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
#[cfg(feature = "database")]
pub use error::RepositoryError;
pub use error::{AppError, AppResult, Operation, OperationError, OptionExt};
