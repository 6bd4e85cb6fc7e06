use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::response::{json_error_handler, path_error_handler};

pub mod comment;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(web::resource("/").route(web::get().to(index)))
    .service(web::scope("/comment").configure(comment::config));
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("up and running")
}
