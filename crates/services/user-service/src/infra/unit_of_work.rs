//! Unit of Work: one transaction per repository call.
//!
//! Every statement the repository issues runs inside its own transaction,
//! committed on success and rolled back on error. No transaction outlives
//! the call that opened it.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Boxed future borrowing the transaction for its whole lifetime.
pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>;

/// Runs closures inside short-lived transactions on a shared pool.
#[derive(Clone)]
pub struct UnitOfWork {
    db: DatabaseConnection,
}

impl UnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute `f` within a fresh transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    pub async fn run<F, T>(&self, f: F) -> Result<T, DbErr>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await?;

        let result = f(&txn).await;

        match result {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
