use actix_web::HttpResponse;

use crate::actions::ActionResponse;

pub mod routes;
pub mod task_list;
pub mod task_view;

// Success envelopes are 200, store failures are 500.
pub fn envelope(response: ActionResponse) -> HttpResponse {
    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}
