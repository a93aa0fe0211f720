//! User aggregate, its value objects, and related types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{ValidationError, ValidationField, ValidationKind};

/// Opaque user identifier.
///
/// Any non-empty token is accepted; fresh values come from an external
/// generator at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// A whitespace-only token is malformed: it cannot be told apart from a
    /// missing id once shells and config files have trimmed it.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationField::Id,
                ValidationKind::Malformed,
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// User name, between [`MIN_NAME_LENGTH`] and [`MAX_NAME_LENGTH`] bytes of UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let length = name.len();
        if length < MIN_NAME_LENGTH {
            return Err(ValidationError::new(
                ValidationField::Name,
                ValidationKind::TooShort {
                    min: MIN_NAME_LENGTH,
                },
            ));
        }
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::new(
                ValidationField::Name,
                ValidationKind::TooLong {
                    max: MAX_NAME_LENGTH,
                },
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// User aggregate root.
///
/// Identity is the [`UserId`], which never changes. Uniqueness across
/// users is decided by [`UserName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Create a user from already-validated parts
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Replace the user's name.
    ///
    /// Callers are responsible for the uniqueness check and for persisting.
    pub fn change_name(&mut self, name: UserName) {
        self.name = name;
    }
}

/// Plain projection of a user, safe to hand to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.to_string(),
        }
    }
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into(),
        }
    }
}

/// Update command. An absent or empty `name` means no rename.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub id: String,
    pub name: Option<String>,
}

impl UpdateUserCommand {
    /// The requested new name, if any
    pub fn requested_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Delete command
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub id: String,
}
