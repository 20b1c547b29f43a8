use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::task_list_models::{DeleteSelectionRequest, TaskBoardResponse};
use super::task_list_table::{StatusFilter, TableState};
use crate::actions;
use crate::db::TaskStore;
use crate::models::priority::priority_options;
use crate::models::task::TaskView;
use crate::routes::envelope;

// One page of the list table
pub async fn get_task_table(
    store: web::Data<dyn TaskStore>,
    state: web::Query<TableState>,
) -> impl Responder {
    info!("Received request for task table: {:?}", state);
    match actions::get_tasks(store.get_ref()).await {
        Ok(tasks) => HttpResponse::Ok().json(state.page(tasks)),
        Err(e) => {
            error!("Failed to fetch tasks: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

// Incomplete and completed tasks for the home page
pub async fn get_task_board(store: web::Data<dyn TaskStore>) -> impl Responder {
    info!("Received request for task board");
    match actions::get_tasks(store.get_ref()).await {
        Ok(tasks) => {
            let (completed, incomplete): (Vec<_>, Vec<_>) =
                tasks.into_iter().partition(|task| task.is_completed);
            HttpResponse::Ok().json(TaskBoardResponse {
                incomplete: incomplete.into_iter().map(TaskView::from).collect(),
                completed: completed.into_iter().map(TaskView::from).collect(),
            })
        }
        Err(e) => {
            error!("Failed to fetch tasks: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn delete_selection(
    store: web::Data<dyn TaskStore>,
    request: web::Json<DeleteSelectionRequest>,
) -> impl Responder {
    let request = request.into_inner();
    info!("Received request to delete tasks: {:?}", request.ids);

    let ids = match request.filter {
        Some(filter) => {
            let tasks = match actions::get_tasks(store.get_ref()).await {
                Ok(tasks) => tasks,
                Err(e) => {
                    error!("Failed to fetch tasks before deleting selection: {}", e);
                    return HttpResponse::InternalServerError().finish();
                }
            };
            let state = TableState {
                status: StatusFilter::All,
                filter: Some(filter),
                ..Default::default()
            };
            state.visible_selection(&tasks, &request.ids)
        }
        None => request.ids,
    };

    envelope(actions::delete_tasks_by_id(store.get_ref(), &ids).await)
}

pub async fn get_priorities() -> impl Responder {
    HttpResponse::Ok().json(priority_options())
}
