use std::io::Error as IoError;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pingtower_checks::error::{ApiErrorBody, ApiErrorPayload};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0:#}")]
    Io(#[from] IoError),
    #[error("Address parsing error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
    #[error("Invalid request body: {0}")]
    Payload(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Payload(_) => StatusCode::BAD_REQUEST,
            AppError::Io(_) | AppError::AddrParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Same body shape as the checks API error responses
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let reason = status.canonical_reason().map(|reason| ApiErrorPayload::Text(reason.into()));
        let body = ApiErrorBody {
            status_code: status.as_u16(),
            message: self.to_string(),
            error: reason,
            timestamp: None,
            path: None,
        };

        HttpResponse::build(status).json(body)
    }
}
