//! User Service Library
//!
//! Manages user aggregates against a relational store: register, get,
//! rename and delete, keeping names unique and within length bounds.
//! The `user-service` binary drives the use cases from the command line.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{error, info};

use domain::{DeleteUserCommand, UpdateUserCommand};

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};
use crate::service::{UserApplicationService, UserManager, UserUniqueness, UuidV4Generator};

/// Use case selected on the command line.
#[derive(Debug, Clone)]
pub enum UserCommand {
    Register { name: String },
    Get { id: String },
    Update { id: String, name: Option<String> },
    Delete { id: String },
}

/// Wire the application service over a repository.
pub fn build_service(repo: Arc<dyn UserRepository>) -> UserManager {
    let uniqueness = UserUniqueness::new(repo.clone());
    UserManager::new(repo, uniqueness, Arc::new(UuidV4Generator))
}

/// Wire the application service over a database connection.
pub fn build_database_service(db: DatabaseConnection) -> UserManager {
    build_service(Arc::new(UserStore::new(db)))
}

/// Connect to the configured database and run one use case.
///
/// Failures are logged here before being returned.
pub async fn run_command(
    command: UserCommand,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database)
        .await
        .inspect_err(|e| error!("Database connection failed: {}", e))?;
    db.ping()
        .await
        .inspect_err(|e| error!("Database ping failed: {}", e))?;
    info!("Successfully connected to database");

    let service = build_database_service(db.get_connection());
    execute(&service, command).await
}

/// Run one use case against `service`, printing its result to stdout.
pub async fn execute(
    service: &dyn UserApplicationService,
    command: UserCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = match command {
        UserCommand::Register { name } => service.register(&name).await.map(|id| {
            info!("User name {} successfully saved", name);
            println!("{}", id);
        }),
        UserCommand::Get { id } => match service.get(&id).await {
            Ok(user) => {
                println!("{}", serde_json::to_string(&user)?);
                Ok(())
            }
            Err(e) => Err(e),
        },
        UserCommand::Update { id, name } => service
            .update(UpdateUserCommand { id, name })
            .await
            .map(|()| info!("User successfully updated")),
        UserCommand::Delete { id } => service
            .delete(DeleteUserCommand { id })
            .await
            .map(|()| info!("User successfully deleted")),
    };

    result.map_err(|e| {
        error!(code = e.code(), "{}", e);
        e.into()
    })
}
