//! In-memory user repository.
//!
//! Holds the same contract as [`UserStore`](super::UserStore), including the
//! unique name constraint, without a live database.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use super::UserRepository;
use common::{AppError, AppResult, RepositoryError};
use domain::{User, UserId, UserName};

/// Map-backed implementation of [`UserRepository`]
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, UserName>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored users, in no particular order
    pub async fn users(&self) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .map(|(id, name)| User::new(id.clone(), name.clone()))
            .collect()
    }

    /// Number of stored users holding `name`
    pub async fn count_named(&self, name: &str) -> usize {
        self.users
            .read()
            .await
            .values()
            .filter(|stored| stored.as_str() == name)
            .count()
    }
}

fn name_taken(users: &HashMap<UserId, UserName>, name: &UserName, except: &UserId) -> bool {
    users
        .iter()
        .any(|(id, stored)| stored == name && id != except)
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|(_, stored)| *stored == name)
            .map(|(id, stored)| User::new(id.clone(), stored.clone())))
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .get(id)
            .map(|name| User::new(id.clone(), name.clone())))
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(user.id()) {
            return Err(RepositoryError::Save {
                name: user.name().to_string(),
                source: DbErr::Custom(format!("duplicate key {}", user.id())),
            }
            .into());
        }
        if name_taken(&users, user.name(), user.id()) {
            return Err(AppError::duplicate_name(user.name().as_str()));
        }

        users.insert(user.id().clone(), user.name().clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if name_taken(&users, user.name(), user.id()) {
            return Err(AppError::duplicate_name(user.name().as_str()));
        }

        if let Some(name) = users.get_mut(user.id()) {
            *name = user.name().clone();
        }
        Ok(())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        self.users.write().await.remove(user.id());
        Ok(())
    }
}
