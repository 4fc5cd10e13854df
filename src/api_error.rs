use crate::engine::EngineError;
use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: u16,
    details: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Engine(e) => match e {
                EngineError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
                EngineError::NoSuchEvent => StatusCode::NOT_FOUND,
                EngineError::PhaseNotEligible { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                EngineError::PhaseAlreadyActive(_) => StatusCode::CONFLICT,
                EngineError::UndeterminedWinner(_) => StatusCode::CONFLICT,
                EngineError::InvalidScore(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        // Storage details stay out of responses.
        let (message, details) = match self {
            ApiError::Store(_) => ("Storage error".to_string(), None),
            other => (other.to_string(), Some(other.to_string())),
        };

        let error_response = ErrorResponse {
            error: message,
            code: status.as_u16(),
            details,
        };

        HttpResponse::build(status).json(error_response)
    }
}
