//! User application service - the register/get/update/delete use cases.
//!
//! Each use case builds or rehydrates the aggregate, runs the uniqueness
//! check where a name is involved, and persists through the repository.
//! Every failure is reported as an [`OperationError`] carrying the use case
//! and its input.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, Operation, OperationError, OptionExt};
use domain::{
    DeleteUserCommand, DomainError, UpdateUserCommand, User, UserData, UserId, UserName,
};

use super::{UserIdGenerator, UserUniqueness};
use crate::repository::UserRepository;

/// User use cases, for dependency injection.
#[async_trait]
pub trait UserApplicationService: Send + Sync {
    /// Register a new user and return its generated id
    async fn register(&self, name: &str) -> Result<UserId, OperationError>;

    /// Get a user by id; `None` if no such user exists
    async fn get(&self, id: &str) -> Result<Option<UserData>, OperationError>;

    /// Rename a user, or rewrite it unchanged when no name is given
    async fn update(&self, command: UpdateUserCommand) -> Result<(), OperationError>;

    /// Delete a user; deleting an unknown user succeeds
    async fn delete(&self, command: DeleteUserCommand) -> Result<(), OperationError>;
}

/// Concrete implementation of UserApplicationService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    uniqueness: UserUniqueness,
    ids: Arc<dyn UserIdGenerator>,
}

impl UserManager {
    /// Create new user service instance with its collaborators
    pub fn new(
        repo: Arc<dyn UserRepository>,
        uniqueness: UserUniqueness,
        ids: Arc<dyn UserIdGenerator>,
    ) -> Self {
        Self {
            repo,
            uniqueness,
            ids,
        }
    }

    async fn try_register(&self, name: &str) -> AppResult<UserId> {
        let name = UserName::new(name)?;
        let id = UserId::new(self.ids.next_id())?;
        let user = User::new(id, name);

        if self.uniqueness.exists(&user).await? {
            return Err(DomainError::duplicate_name(user.name().as_str()).into());
        }

        self.repo.save(&user).await?;
        tracing::debug!(id = %user.id(), name = %user.name(), "User registered");
        Ok(user.id().clone())
    }

    async fn try_get(&self, id: &str) -> AppResult<Option<UserData>> {
        let id = UserId::new(id)?;
        let user = self.repo.find_by_id(&id).await?;
        Ok(user.map(UserData::from))
    }

    async fn try_update(&self, command: &UpdateUserCommand) -> AppResult<()> {
        let id = UserId::new(command.id.as_str())?;
        let mut user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_not_found(id.as_str())?;

        if let Some(name) = command.requested_name() {
            user.change_name(UserName::new(name)?);

            if self.uniqueness.exists(&user).await? {
                return Err(DomainError::duplicate_name(name).into());
            }
        }

        self.repo.update(&user).await?;
        tracing::debug!(id = %user.id(), name = %user.name(), "User updated");
        Ok(())
    }

    async fn try_delete(&self, command: &DeleteUserCommand) -> AppResult<()> {
        let id = UserId::new(command.id.as_str())?;
        let Some(user) = self.repo.find_by_id(&id).await? else {
            tracing::debug!(id = %id, "User already absent");
            return Ok(());
        };

        self.repo.delete(&user).await?;
        tracing::debug!(id = %id, "User deleted");
        Ok(())
    }
}

#[async_trait]
impl UserApplicationService for UserManager {
    async fn register(&self, name: &str) -> Result<UserId, OperationError> {
        self.try_register(name)
            .await
            .map_err(|e| OperationError::new(Operation::Register, name, e))
    }

    async fn get(&self, id: &str) -> Result<Option<UserData>, OperationError> {
        self.try_get(id)
            .await
            .map_err(|e| OperationError::new(Operation::Get, id, e))
    }

    async fn update(&self, command: UpdateUserCommand) -> Result<(), OperationError> {
        self.try_update(&command)
            .await
            .map_err(|e| OperationError::new(Operation::Update, command.id.as_str(), e))
    }

    async fn delete(&self, command: DeleteUserCommand) -> Result<(), OperationError> {
        self.try_delete(&command)
            .await
            .map_err(|e| OperationError::new(Operation::Delete, command.id.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::{AppError, RepositoryError};
    use sea_orm::DbErr;

    struct FixedIds;

    impl UserIdGenerator for FixedIds {
        fn next_id(&self) -> String {
            "fixed-id".to_string()
        }
    }

    fn manager(repo: MockUserRepository) -> UserManager {
        let repo: Arc<dyn UserRepository> = Arc::new(repo);
        UserManager::new(repo.clone(), UserUniqueness::new(repo), Arc::new(FixedIds))
    }

    fn stored(id: &str, name: &str) -> User {
        User::new(UserId::new(id).unwrap(), UserName::new(name).unwrap())
    }

    #[tokio::test]
    async fn register_saves_new_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_save()
            .withf(|user| user.id().as_str() == "fixed-id" && user.name().as_str() == "alice")
            .times(1)
            .returning(|_| Ok(()));

        let id = manager(repo).register("alice").await.unwrap();

        assert_eq!(id.as_str(), "fixed-id");
    }

    #[tokio::test]
    async fn register_rejects_invalid_name_before_touching_storage() {
        let repo = MockUserRepository::new();

        let err = manager(repo).register("al").await.unwrap_err();

        assert_eq!(err.operation, Operation::Register);
        assert_eq!(err.input, "al");
        assert!(matches!(err.cause(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn register_does_not_save_duplicate() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(Some(stored("other-id", "bob"))));
        repo.expect_save().never();

        let err = manager(repo).register("bob").await.unwrap_err();

        assert!(matches!(err.cause(), AppError::DuplicateName(name) if name == "bob"));
    }

    #[tokio::test]
    async fn register_surfaces_save_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_save().returning(|user| {
            Err(RepositoryError::Save {
                name: user.name().to_string(),
                source: DbErr::Custom("connection reset".to_string()),
            }
            .into())
        });

        let err = manager(repo).register("alice").await.unwrap_err();

        assert_eq!(err.code(), "REPOSITORY_ERROR");
        assert!(matches!(
            err.cause(),
            AppError::Repository(RepositoryError::Save { .. })
        ));
    }

    #[tokio::test]
    async fn get_surfaces_lookup_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Err(RepositoryError::FindById {
                id: id.to_string(),
                source: DbErr::Custom("timeout".to_string()),
            }
            .into())
        });

        let err = manager(repo).get("id-1").await.unwrap_err();

        assert_eq!(err.operation, Operation::Get);
        assert!(matches!(
            err.cause(),
            AppError::Repository(RepositoryError::FindById { .. })
        ));
    }

    #[tokio::test]
    async fn get_rejects_blank_id() {
        let repo = MockUserRepository::new();

        let err = manager(repo).get("").await.unwrap_err();

        assert!(matches!(err.cause(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_without_name_skips_uniqueness_check() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(stored("id-1", "alice"))));
        repo.expect_find_by_name().never();
        repo.expect_update()
            .withf(|user| user.name().as_str() == "alice")
            .times(1)
            .returning(|_| Ok(()));

        let command = UpdateUserCommand {
            id: "id-1".to_string(),
            name: None,
        };

        manager(repo).update(command).await.unwrap();
    }

    #[tokio::test]
    async fn update_of_unknown_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let command = UpdateUserCommand {
            id: "missing".to_string(),
            name: Some("alicia".to_string()),
        };
        let err = manager(repo).update(command).await.unwrap_err();

        assert_eq!(err.operation, Operation::Update);
        assert!(matches!(err.cause(), AppError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn delete_surfaces_delete_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(stored("id-1", "alice"))));
        repo.expect_delete().returning(|user| {
            Err(RepositoryError::Delete {
                id: user.id().to_string(),
                source: DbErr::Custom("lock timeout".to_string()),
            }
            .into())
        });

        let command = DeleteUserCommand {
            id: "id-1".to_string(),
        };
        let err = manager(repo).delete(command).await.unwrap_err();

        assert!(matches!(
            err.cause(),
            AppError::Repository(RepositoryError::Delete { .. })
        ));
    }
}
