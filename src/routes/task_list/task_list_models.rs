use serde::{Deserialize, Serialize};

use crate::models::task::TaskView;

#[derive(Serialize)]
pub struct TaskBoardResponse {
    pub incomplete: Vec<TaskView>,
    pub completed: Vec<TaskView>,
}

// Batch delete of the rows selected in a list table
#[derive(Deserialize)]
pub struct DeleteSelectionRequest {
    pub ids: Vec<i64>,
    // When present, only ids still matching the table's title filter are deleted
    pub filter: Option<String>,
}
