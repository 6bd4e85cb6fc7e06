use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::repository::StoreError;
use crate::response::response_from_error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Body or path parameter could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}

// Every failure kind answers 400, including not-found and database errors.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        response_from_error(self)
    }
}
