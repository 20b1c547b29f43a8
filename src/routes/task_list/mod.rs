pub mod task_list_handlers;
pub mod task_list_models;
pub mod task_list_table;
