// User-facing messages returned in action envelopes.

pub const ERROR: &str = "Task store operation failed";

pub const CREATE_SUCCESS: &str = "Task created successfully";
pub const CREATE_FAILURE: &str = "Failed to create task";
pub const UPDATE_SUCCESS: &str = "Task updated successfully";
pub const UPDATE_FAILURE: &str = "Failed to update task";
pub const MARK_AS_COMPLETED: &str = "Task marked as completed";
pub const MARK_AS_INCOMPLETE: &str = "Task marked as incomplete";
pub const MARK_FAILURE: &str = "Failed to change task status";
pub const DELETE_SUCCESS: &str = "Task deleted successfully";
pub const DELETE_FAILURE: &str = "Failed to delete task";
pub const MULTIPLE_DELETION_SUCCESS: &str = "Selected tasks deleted successfully";
pub const MULTIPLE_DELETION_FAILURE: &str = "Failed to delete selected tasks";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DUE_DATE_REQUIRED: &str = "Due date is required";
pub const DUE_DATE_INVALID: &str = "Due date must be an RFC 3339 timestamp";
