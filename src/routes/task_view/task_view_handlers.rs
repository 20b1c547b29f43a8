use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::task_view_models::{AddTaskRequest, GetTaskDetailResponse, UpdateTaskRequest};
use crate::actions::{self, ActionResponse};
use crate::db::TaskStore;
use crate::models::task::TaskView;
use crate::routes::envelope;

// Handler to get task details. A missing task is not an error.
pub async fn get_task_detail(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Received request for task {}", id);

    match actions::get_task_by_id(store.get_ref(), id).await {
        Ok(task) => {
            if task.is_none() {
                info!("Task not found: {}", id);
            }
            HttpResponse::Ok().json(GetTaskDetailResponse {
                task: task.map(TaskView::from),
            })
        }
        Err(e) => {
            error!("Failed to fetch task {}: {}", id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn add_task(
    store: web::Data<dyn TaskStore>,
    request: web::Json<AddTaskRequest>,
) -> impl Responder {
    info!("Received request to add task: {}", request.title);
    let task = match request.into_inner().validate() {
        Ok(task) => task,
        Err(message) => {
            info!("Rejected task form: {}", message);
            return HttpResponse::BadRequest().json(ActionResponse::failure(message));
        }
    };

    envelope(actions::add_task(store.get_ref(), &task).await)
}

pub async fn update_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i64>,
    request: web::Json<UpdateTaskRequest>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to update task {}", id);
    let changes = match request.into_inner().validate() {
        Ok(changes) => changes,
        Err(message) => {
            info!("Rejected update for task {}: {}", id, message);
            return HttpResponse::BadRequest().json(ActionResponse::failure(message));
        }
    };
    if changes.is_empty() {
        info!("No fields supplied for task {}, refreshing updated_at only", id);
    }

    envelope(actions::update_task(store.get_ref(), id, &changes).await)
}

pub async fn mark_completed(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to mark task {} as completed", id);
    envelope(actions::mark_as_completed(store.get_ref(), id).await)
}

pub async fn mark_incomplete(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to mark task {} as incomplete", id);
    envelope(actions::mark_as_incomplete(store.get_ref(), id).await)
}

pub async fn delete_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to delete task {}", id);
    envelope(actions::delete_task(store.get_ref(), id).await)
}
