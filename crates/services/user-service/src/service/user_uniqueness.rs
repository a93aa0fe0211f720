//! User name uniqueness rule.

use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// Answers whether a candidate user's name is already held by someone else.
///
/// This is an early check only; the storage constraint on `users.name` is
/// what actually keeps names unique under concurrent writers.
pub struct UserUniqueness {
    repo: Arc<dyn UserRepository>,
}

impl UserUniqueness {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// True if a different user already holds `candidate`'s name.
    ///
    /// A stored user with the candidate's own id does not count, so renaming
    /// a user to their current name is not a collision.
    pub async fn exists(&self, candidate: &User) -> AppResult<bool> {
        let found = self.repo.find_by_name(candidate.name()).await?;
        Ok(found.is_some_and(|user| user.id() != candidate.id()))
    }
}
