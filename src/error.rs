use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;
use crate::models::ErrorResponse;

/// Errors raised at the HTTP boundary before any scoring happens
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Validation failed for batch entry {index}: {source}")]
    BatchValidation {
        index: usize,
        source: ValidationErrors,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::BatchValidation { .. } => "validation_failed",
            ApiError::InvalidJson(_) => "invalid_json",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}
