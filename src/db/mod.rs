//! Query layer: one parameterized statement per operation against the
//! `tasks` table.

pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::task::{NewTask, Task, TaskChanges};

pub use sqlite::SqliteTaskStore;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store handle shared by every request. Opened once at start-up.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All rows. Callers must not rely on the order.
    async fn list(&self) -> Result<Vec<Task>, PersistenceError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>, PersistenceError>;

    /// Returns the id assigned by the store.
    async fn insert(&self, task: &NewTask) -> Result<i64, PersistenceError>;

    /// Merges the supplied fields into the row and returns the number of
    /// rows affected. An unknown id affects zero rows.
    async fn update(&self, id: i64, changes: &TaskChanges) -> Result<u64, PersistenceError>;

    async fn set_completed(&self, id: i64, value: bool) -> Result<u64, PersistenceError> {
        let changes = TaskChanges {
            is_completed: Some(value),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, PersistenceError>;

    // One statement per id, no transaction. The first failure aborts
    // the loop and earlier deletes stay committed.
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, PersistenceError> {
        let mut deleted = 0;
        for &id in ids {
            deleted += self.delete_by_id(id).await?;
        }
        Ok(deleted)
    }
}
