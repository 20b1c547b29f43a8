use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;
use std::sync::Arc;

mod actions;
mod config;
mod content;
mod db;
mod models;
mod routes;

use config::AppConfig;
use db::{SqliteTaskStore, TaskStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let store = SqliteTaskStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to open task store {}: {}", config.database_url, e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;
    let shared: Arc<dyn TaskStore> = Arc::new(store.clone());

    info!("Server running at http://{}", config.server_address);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(shared.clone()))
            .route("/", web::get().to(|| async { HttpResponse::Ok().body("Hello, this is the task board.") }))
            .configure(routes::routes::task_list_configure)
            .configure(routes::routes::task_view_configure)
    })
    .bind(&config.server_address)?
    .run()
    .await;

    store.close().await;
    info!("Task store closed");
    result
}
