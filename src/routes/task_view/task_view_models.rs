use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::models::priority::Priority;
use crate::models::task::{NewTask, TaskChanges, TaskView};

// Task form submission for a new task
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub is_completed: bool,
}

// Task form submission for an existing task, any subset of fields
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}

#[derive(Serialize)]
pub struct GetTaskDetailResponse {
    pub task: Option<TaskView>,
}

fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

fn parse_due_date(value: &str) -> Result<DateTime<Utc>, &'static str> {
    required(value, content::DUE_DATE_REQUIRED)?;
    DateTime::parse_from_rfc3339(value.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| content::DUE_DATE_INVALID)
}

impl AddTaskRequest {
    /// Checks the form rules and returns the first violated one.
    pub fn validate(self) -> Result<NewTask, &'static str> {
        required(&self.title, content::TITLE_REQUIRED)?;
        required(&self.description, content::DESCRIPTION_REQUIRED)?;
        let due_date = parse_due_date(&self.due_date)?;
        Ok(NewTask {
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date,
            is_completed: self.is_completed,
        })
    }
}

impl UpdateTaskRequest {
    pub fn validate(self) -> Result<TaskChanges, &'static str> {
        if let Some(title) = &self.title {
            required(title, content::TITLE_REQUIRED)?;
        }
        if let Some(description) = &self.description {
            required(description, content::DESCRIPTION_REQUIRED)?;
        }
        let due_date = match &self.due_date {
            Some(value) => Some(parse_due_date(value)?),
            None => None,
        };
        Ok(TaskChanges {
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date,
            is_completed: self.is_completed,
        })
    }
}
