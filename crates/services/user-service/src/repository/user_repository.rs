//! User repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::infra::UnitOfWork;
use common::{AppError, AppResult, RepositoryError};
use domain::{User, UserId, UserName};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` on a miss. Writes never check for the
/// existence of the target row: updating or deleting a missing user is a
/// no-op, not an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by name
    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Insert a new user
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Overwrite the stored name of the user with the same ID
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Delete the user with the same ID
    async fn delete(&self, user: &User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    uow: UnitOfWork,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            uow: UnitOfWork::new(db),
        }
    }
}

/// Map a failed write, turning a unique violation into a duplicate name.
///
/// Ids are fresh per registration, so the name column is the only unique
/// key a write can realistically collide on.
fn write_error(
    err: DbErr,
    name: &UserName,
    wrap: impl FnOnce(DbErr) -> RepositoryError,
) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::duplicate_name(name.as_str()),
        _ => AppError::from(wrap(err)),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>> {
        tracing::debug!(name = %name, "Finding user by name");
        let raw = name.to_string();

        self.uow
            .run(move |txn| {
                Box::pin(async move {
                    UserEntity::find()
                        .filter(user::Column::Name.eq(raw))
                        .one(txn)
                        .await
                        .and_then(|model| model.map(User::try_from).transpose())
                })
            })
            .await
            .map_err(|source| {
                RepositoryError::FindByName {
                    name: name.to_string(),
                    source,
                }
                .into()
            })
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        tracing::debug!(id = %id, "Finding user by id");
        let raw = id.to_string();

        self.uow
            .run(move |txn| {
                Box::pin(async move {
                    UserEntity::find_by_id(raw)
                        .one(txn)
                        .await
                        .and_then(|model| model.map(User::try_from).transpose())
                })
            })
            .await
            .map_err(|source| {
                RepositoryError::FindById {
                    id: id.to_string(),
                    source,
                }
                .into()
            })
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        tracing::debug!(id = %user.id(), name = %user.name(), "Saving user");
        let model = ActiveModel::from(user);

        self.uow
            .run(move |txn| {
                Box::pin(async move {
                    UserEntity::insert(model)
                        .exec_without_returning(txn)
                        .await
                        .map(|_| ())
                })
            })
            .await
            .map_err(|err| {
                write_error(err, user.name(), |source| RepositoryError::Save {
                    name: user.name().to_string(),
                    source,
                })
            })
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        tracing::debug!(id = %user.id(), name = %user.name(), "Updating user");
        let id = user.id().to_string();
        let name = user.name().to_string();

        let rows = self
            .uow
            .run(move |txn| {
                Box::pin(async move {
                    UserEntity::update_many()
                        .col_expr(user::Column::Name, Expr::value(name))
                        .filter(user::Column::Id.eq(id))
                        .exec(txn)
                        .await
                        .map(|result| result.rows_affected)
                })
            })
            .await
            .map_err(|err| {
                write_error(err, user.name(), |source| RepositoryError::Update {
                    id: user.id().to_string(),
                    source,
                })
            })?;

        tracing::debug!(id = %user.id(), rows, "User updated");
        Ok(())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        tracing::debug!(id = %user.id(), "Deleting user");
        let id = user.id().to_string();

        let rows = self
            .uow
            .run(move |txn| {
                Box::pin(async move {
                    UserEntity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map(|result| result.rows_affected)
                })
            })
            .await
            .map_err(|source| RepositoryError::Delete {
                id: user.id().to_string(),
                source,
            })?;

        tracing::debug!(id = %user.id(), rows, "User deleted");
        Ok(())
    }
}
