use actix_web::web;

use super::task_list::task_list_handlers;

pub fn task_list_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-tasks")
            .route("", web::get().to(task_list_handlers::get_task_table))
            .route("/", web::get().to(task_list_handlers::get_task_table))
            .route("/board", web::get().to(task_list_handlers::get_task_board))
            .route("/delete-selection", web::post().to(task_list_handlers::delete_selection))
    )
    .route("/api-priorities", web::get().to(task_list_handlers::get_priorities));
}

use super::task_view::task_view_handlers;

pub fn task_view_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-task")
            .route("", web::post().to(task_view_handlers::add_task))
            .route("/{id}", web::get().to(task_view_handlers::get_task_detail))
            .route("/{id}", web::put().to(task_view_handlers::update_task))
            .route("/{id}", web::delete().to(task_view_handlers::delete_task))
            .route("/{id}/mark-completed", web::post().to(task_view_handlers::mark_completed))
            .route("/{id}/mark-incomplete", web::post().to(task_view_handlers::mark_incomplete))
    );
}
