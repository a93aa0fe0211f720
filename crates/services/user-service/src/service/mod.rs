//! Service layer - uniqueness rule and user use cases.

mod id_generator;
mod user_service;
mod user_uniqueness;

pub use id_generator::{UserIdGenerator, UuidV4Generator};
pub use user_service::{UserApplicationService, UserManager};
pub use user_uniqueness::UserUniqueness;
