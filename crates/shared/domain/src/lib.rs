//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, ValidationError, ValidationField, ValidationKind};
pub use user::{DeleteUserCommand, UpdateUserCommand, User, UserData, UserId, UserName};
