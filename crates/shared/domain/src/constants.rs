//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum user name length, in UTF-8 bytes
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum user name length, in UTF-8 bytes
pub const MAX_NAME_LENGTH: usize = 20;
