//! Errors raised when talking to the checks API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

#[derive(Debug, Error)]
pub enum ChecksApiError {
    /// Rejected payload, either locally before sending or by the API
    #[error("{message}")]
    Validation { message: String, errors: Vec<ValidationError> },
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// No response was received
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Api { message: String, status: u16, details: Option<Value> },
}

/// Error body returned by the checks API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<ApiErrorPayload>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorPayload {
    Text(String),
    List(Vec<ApiErrorItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorItem {
    Field(ValidationError),
    Text(String),
}

/// Error summary meant for logs and bug reports
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub name: &'static str,
    pub message: String,
    pub status_code: u16,
    pub details: Option<Value>,
}

impl ChecksApiError {
    /// Turn a failed local validation into an error, `None` when it passed
    pub fn validation(result: ValidationResult) -> Option<Self> {
        if result.is_valid {
            return None;
        }
        Some(ChecksApiError::Validation {
            message: "Check validation failed".to_string(),
            errors: result.errors,
        })
    }

    /// Map an error response of the checks API
    pub fn from_response(status: u16, body: ApiErrorBody) -> Self {
        let message = if body.message.is_empty() {
            format!("Request failed with status {status}")
        } else {
            body.message
        };

        match status {
            400 => match body.error {
                Some(ApiErrorPayload::List(items)) => ChecksApiError::Validation {
                    message,
                    errors: items.into_iter().map(ValidationError::from).collect(),
                },
                other => ChecksApiError::Api { message, status, details: payload_details(other) },
            },
            401 => ChecksApiError::Authentication(message),
            403 => ChecksApiError::Forbidden(message),
            404 => ChecksApiError::NotFound(message),
            409 => ChecksApiError::Conflict(message),
            _ => ChecksApiError::Api { message, status, details: payload_details(body.error) },
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ChecksApiError::Validation { .. } => 400,
            ChecksApiError::Authentication(_) => 401,
            ChecksApiError::Forbidden(_) => 403,
            ChecksApiError::NotFound(_) => 404,
            ChecksApiError::Conflict(_) => 409,
            ChecksApiError::Network(_) => 0,
            ChecksApiError::Api { status, .. } => *status,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChecksApiError::Validation { .. } => "ValidationError",
            ChecksApiError::Authentication(_) => "AuthenticationError",
            ChecksApiError::Forbidden(_) => "ForbiddenError",
            ChecksApiError::NotFound(_) => "NotFoundError",
            ChecksApiError::Conflict(_) => "ConflictError",
            ChecksApiError::Network(_) => "NetworkError",
            ChecksApiError::Api { .. } => "ChecksApiError",
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ChecksApiError::Validation { errors, .. } => match errors.as_slice() {
                [] => "Invalid check data".to_string(),
                [single] => single.message.clone(),
                many => {
                    let lines: Vec<&str> = many.iter().map(|e| e.message.as_str()).collect();
                    format!("Validation errors:\n{}", lines.join("\n"))
                }
            },
            ChecksApiError::Authentication(_) => "Please sign in to continue".to_string(),
            ChecksApiError::Forbidden(_) => {
                "You do not have permission to perform this action".to_string()
            }
            ChecksApiError::NotFound(_) => {
                "The requested resource was not found or has been deleted".to_string()
            }
            ChecksApiError::Conflict(_) => {
                "Data conflict, the object may already exist".to_string()
            }
            ChecksApiError::Network(_) => {
                "Cannot reach the server, check your connection".to_string()
            }
            ChecksApiError::Api { message, .. } => message.clone(),
        }
    }

    pub fn details(&self) -> ErrorDetails {
        let details = match self {
            ChecksApiError::Validation { errors, .. } => serde_json::to_value(errors).ok(),
            ChecksApiError::Api { details, .. } => details.clone(),
            _ => None,
        };

        ErrorDetails {
            name: self.name(),
            message: self.to_string(),
            status_code: self.status_code(),
            details,
        }
    }
}

fn payload_details(payload: Option<ApiErrorPayload>) -> Option<Value> {
    payload.and_then(|payload| serde_json::to_value(payload).ok())
}

impl From<ApiErrorItem> for ValidationError {
    fn from(item: ApiErrorItem) -> Self {
        match item {
            ApiErrorItem::Field(error) => error,
            ApiErrorItem::Text(message) => {
                ValidationError::new("unknown", ValidationErrorKind::Remote, message)
            }
        }
    }
}

impl From<reqwest::Error> for ChecksApiError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => ChecksApiError::Api {
                message: error.to_string(),
                status: status.as_u16(),
                details: None,
            },
            None if error.is_builder() => ChecksApiError::Api {
                message: format!("Invalid request: {error}"),
                status: 0,
                details: None,
            },
            None if error.is_decode() => ChecksApiError::Api {
                message: format!("Unexpected response from the checks API: {error}"),
                status: 500,
                details: None,
            },
            None => ChecksApiError::Network(format!("Cannot connect to the server: {error}")),
        }
    }
}
