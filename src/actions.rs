//! Action layer. Reads hand back the store's data untouched; every write
//! is wrapped in an [`ActionResponse`] and never returns an error.

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::db::{PersistenceError, TaskStore};
use crate::models::task::{NewTask, Task, TaskChanges};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn success(message: &str) -> Self {
        ActionResponse {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: &str) -> Self {
        ActionResponse {
            success: false,
            message: message.into(),
        }
    }
}

// The single point where store errors are logged and dropped.
fn respond<T>(result: Result<T, PersistenceError>, success: &str, failure: &str) -> ActionResponse {
    match result {
        Ok(_) => {
            info!("{}", success);
            ActionResponse::success(success)
        }
        Err(e) => {
            error!("{}: {}", content::ERROR, e);
            ActionResponse::failure(failure)
        }
    }
}

pub async fn get_tasks<S: TaskStore + ?Sized>(store: &S) -> Result<Vec<Task>, PersistenceError> {
    store.list().await
}

pub async fn get_task_by_id<S: TaskStore + ?Sized>(
    store: &S,
    id: i64,
) -> Result<Option<Task>, PersistenceError> {
    store.get_by_id(id).await
}

pub async fn add_task<S: TaskStore + ?Sized>(store: &S, task: &NewTask) -> ActionResponse {
    respond(
        store.insert(task).await,
        content::CREATE_SUCCESS,
        content::CREATE_FAILURE,
    )
}

// An id that matches nothing still reports success.
pub async fn update_task<S: TaskStore + ?Sized>(
    store: &S,
    id: i64,
    changes: &TaskChanges,
) -> ActionResponse {
    respond(
        store.update(id, changes).await,
        content::UPDATE_SUCCESS,
        content::UPDATE_FAILURE,
    )
}

pub async fn mark_as_completed<S: TaskStore + ?Sized>(store: &S, id: i64) -> ActionResponse {
    respond(
        store.set_completed(id, true).await,
        content::MARK_AS_COMPLETED,
        content::MARK_FAILURE,
    )
}

pub async fn mark_as_incomplete<S: TaskStore + ?Sized>(store: &S, id: i64) -> ActionResponse {
    respond(
        store.set_completed(id, false).await,
        content::MARK_AS_INCOMPLETE,
        content::MARK_FAILURE,
    )
}

pub async fn delete_task<S: TaskStore + ?Sized>(store: &S, id: i64) -> ActionResponse {
    respond(
        store.delete_by_id(id).await,
        content::DELETE_SUCCESS,
        content::DELETE_FAILURE,
    )
}

/// Deletes one id at a time. A failure part-way reports the whole batch
/// as failed while earlier deletes remain applied.
pub async fn delete_tasks_by_id<S: TaskStore + ?Sized>(store: &S, ids: &[i64]) -> ActionResponse {
    respond(
        store.delete_by_ids(ids).await,
        content::MULTIPLE_DELETION_SUCCESS,
        content::MULTIPLE_DELETION_FAILURE,
    )
}
