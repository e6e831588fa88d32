use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chemtrack_lookup::LookupError;
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Lookup(#[from] LookupError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Lookup(e) => match e {
                LookupError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                LookupError::LookupFailed(_) => (StatusCode::NOT_FOUND, e.to_string()),
                LookupError::Transport(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
