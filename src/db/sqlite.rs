use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};
use sqlx::QueryBuilder;

use super::{PersistenceError, TaskStore};
use crate::models::task::{NewTask, Task, TaskChanges};

const CREATE_TASKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(title) > 0),
        description TEXT NOT NULL CHECK (length(description) > 0),
        priority INTEGER NOT NULL DEFAULT 0 CHECK (priority BETWEEN 0 AND 3),
        due_date TEXT NOT NULL,
        is_completed BOOLEAN NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

const SELECT_TASK_COLUMNS: &str =
    "SELECT id, title, description, priority, due_date, is_completed, created_at, updated_at FROM tasks";

#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, PersistenceError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let store = SqliteTaskStore { pool };
        store.create_schema().await?;
        Ok(store)
    }

    // Every connection to `sqlite::memory:` is a separate database, so the
    // pool is pinned to a single connection that never expires.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, PersistenceError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = SqliteTaskStore { pool };
        store.create_schema().await?;
        Ok(store)
    }

    async fn create_schema(&self) -> Result<(), PersistenceError> {
        sqlx::query(CREATE_TASKS_TABLE).execute(&self.pool).await?;
        info!("Task table is ready");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list(&self) -> Result<Vec<Task>, PersistenceError> {
        let tasks = sqlx::query_as::<_, Task>(&format!("{} ORDER BY id", SELECT_TASK_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>, PersistenceError> {
        let task = sqlx::query_as::<_, Task>(&format!("{} WHERE id = ?", SELECT_TASK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn insert(&self, task: &NewTask) -> Result<i64, PersistenceError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, priority, due_date, is_completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority)
        .bind(task.due_date)
        .bind(task.is_completed)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, changes: &TaskChanges) -> Result<u64, PersistenceError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET ");
        let mut fields = query.separated(", ");
        if let Some(title) = &changes.title {
            fields.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &changes.description {
            fields.push("description = ").push_bind_unseparated(description.clone());
        }
        if let Some(priority) = changes.priority {
            fields.push("priority = ").push_bind_unseparated(priority);
        }
        if let Some(due_date) = changes.due_date {
            fields.push("due_date = ").push_bind_unseparated(due_date);
        }
        if let Some(is_completed) = changes.is_completed {
            fields.push("is_completed = ").push_bind_unseparated(is_completed);
        }
        fields.push("updated_at = ").push_bind_unseparated(Utc::now());
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, PersistenceError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::priority::Priority;
    use chrono::{DateTime, TimeZone};
    use std::time::Duration;

    fn due(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{} description", title),
            priority: Priority::Medium,
            due_date: due(1),
            is_completed: false,
        }
    }

    #[actix_web::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let id = store.insert(&new_task("Pay rent")).await.unwrap();

        let task = store.get_by_id(id).await.unwrap().expect("inserted row");
        assert_eq!(task.title, "Pay rent");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, due(1));
        assert!(!task.is_completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[actix_web::test]
    async fn ids_are_unique() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let first = store.insert(&new_task("one")).await.unwrap();
        let second = store.insert(&new_task("two")).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn missing_id_is_absent_not_an_error() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn update_merges_only_supplied_fields() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let id = store.insert(&new_task("Draft")).await.unwrap();
        let before = store.get_by_id(id).await.unwrap().unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let changes = TaskChanges {
            title: Some("Final".into()),
            priority: Some(Priority::Urgent),
            ..Default::default()
        };
        assert_eq!(store.update(id, &changes).await.unwrap(), 1);

        let after = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.title, "Final");
        assert_eq!(after.priority, Priority::Urgent);
        assert_eq!(after.description, before.description);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.is_completed, before.is_completed);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_affects_no_rows() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let changes = TaskChanges {
            title: Some("Ghost".into()),
            ..Default::default()
        };
        assert_eq!(store.update(99, &changes).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn empty_title_violates_constraint() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let mut task = new_task("x");
        task.title.clear();
        assert!(store.insert(&task).await.is_err());
    }

    #[actix_web::test]
    async fn set_completed_only_touches_flag() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let id = store.insert(&new_task("Laundry")).await.unwrap();

        assert_eq!(store.set_completed(id, true).await.unwrap(), 1);
        let task = store.get_by_id(id).await.unwrap().unwrap();
        assert!(task.is_completed);
        assert_eq!(task.title, "Laundry");
    }

    #[actix_web::test]
    async fn delete_by_ids_removes_each_listed_row() {
        let store = SqliteTaskStore::in_memory().await.unwrap();
        let a = store.insert(&new_task("a")).await.unwrap();
        let b = store.insert(&new_task("b")).await.unwrap();
        let c = store.insert(&new_task("c")).await.unwrap();

        assert_eq!(store.delete_by_ids(&[a, c, 1000]).await.unwrap(), 2);
        let remaining: Vec<i64> = store.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![b]);
    }
}
