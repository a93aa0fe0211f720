//! Identifier generation for new users.

use uuid::Uuid;

/// Source of fresh, globally unique user identifiers.
pub trait UserIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Generates random UUID v4 strings
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl UserIdGenerator for UuidV4Generator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
