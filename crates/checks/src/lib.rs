//! PingTower check definitions
//!
//! This library provides validation and classification of uptime check
//! definitions (HTTP, TCP and Ping), built-in configuration templates,
//! summaries of result history and a thin client for the remote checks API.
//!
//! Validation is pure and synchronous: nothing in [`validation`], [`target`]
//! or [`discriminate`] performs I/O or keeps state between calls.

pub mod client;
pub mod discriminate;
pub mod error;
pub mod history;
pub mod target;
pub mod templates;
pub mod types;
pub mod validation;

// Re-export main types
pub use client::ChecksClient;
pub use error::ChecksApiError;
pub use types::{
    Check, CheckConfig, CheckType, CreateCheckRequest, HttpConfig, PingConfig, TcpConfig,
    UpdateCheckRequest,
};
pub use validation::{
    ValidationError, ValidationErrorKind, ValidationResult, validate_create_check_request,
    validate_update_check_request,
};
