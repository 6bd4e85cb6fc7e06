use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpRequest, HttpResponse,
};
use log::warn;
use serde::Serialize;

use crate::entity::comment;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: i64,
    pub comment: String,
    pub user_id: i64,
}

impl From<comment::Model> for CommentDto {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            comment: model.comment,
            user_id: model.user_id,
        }
    }
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub success: bool,
    pub error: String,
    pub comment: Option<CommentDto>,
}

impl CommentResponse {
    pub fn success(comment: Option<CommentDto>) -> Self {
        Self {
            success: true,
            error: "".to_string(),
            comment,
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
            comment: None,
        }
    }
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub success: bool,
    pub error: String,
    pub comments: Vec<CommentDto>,
}

impl CommentsResponse {
    pub fn success(comments: Vec<CommentDto>) -> Self {
        Self {
            success: true,
            error: "".to_string(),
            comments,
        }
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::invalid_request(err.to_string()).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::invalid_request(err.to_string()).into()
}

pub fn response_from_error(err: &AppError) -> HttpResponse {
    warn!("request failed: {}", err);
    HttpResponse::BadRequest().json(CommentResponse::fail(err.to_string()))
}
