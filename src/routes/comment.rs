use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::repository::CommentRepository;
use crate::response::{CommentDto, CommentResponse, CommentsResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(vec!["", "/"])
            .route(web::post().to(create))
            .route(web::get().to(list)),
    )
    .service(
        web::resource("/{comment_id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::delete().to(remove)),
    );
}

#[derive(Deserialize)]
struct CommentRequest {
    comment: String,
    user_id: i64,
}

async fn create(
    payload: web::Json<CommentRequest>,
    repo: web::Data<CommentRepository>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let created = repo.create(payload.comment, payload.user_id).await?;
    Ok(HttpResponse::Ok().json(CommentResponse::success(Some(created.into()))))
}

async fn list(repo: web::Data<CommentRepository>) -> Result<HttpResponse, AppError> {
    let rows = repo.get_all().await?;
    let comments = rows.into_iter().map(CommentDto::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(CommentsResponse::success(comments)))
}

async fn get(
    repo: web::Data<CommentRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let found = repo.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CommentResponse::success(Some(found.into()))))
}

async fn update(
    payload: web::Json<CommentRequest>,
    repo: web::Data<CommentRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let updated = repo
        .update(path.into_inner(), payload.comment, payload.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(CommentResponse::success(Some(updated.into()))))
}

/// The body is optional and its fields are ignored, but when present it must be JSON.
async fn remove(
    body: web::Bytes,
    repo: web::Data<CommentRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| AppError::invalid_request(format!("Json deserialize error: {}", e)))?;
    }
    repo.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CommentResponse::success(None)))
}
