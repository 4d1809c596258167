use super::{
    ValidationError, ValidationErrorKind, ValidationResult,
    config::validate_config,
    fields::{validate_interval, validate_name, validate_target},
};
use crate::types::{CreateCheckRequest, UpdateCheckRequest};

/// Full validation of a create request
///
/// Name, target and interval are always checked. A missing config is not an
/// error: the API fills in defaults for the declared type.
pub fn validate_create_check_request(request: &CreateCheckRequest) -> ValidationResult {
    let mut errors = Vec::new();

    errors.extend(validate_name(&request.name));
    errors.extend(validate_target(request.check_type, &request.target));
    errors.extend(validate_interval(request.interval.as_ref()));

    if let Some(config) = &request.config {
        errors.extend(validate_config(request.check_type, config));
    }

    tracing::debug!(
        "Validated create request for {} check '{}': {} error(s)",
        request.check_type,
        request.name,
        errors.len()
    );

    ValidationResult::from_errors(errors)
}

/// Validation of a partial update
///
/// Only the fields present are checked. The target and the config are only
/// checked when the same payload also carries the check type, since their
/// meaning depends on it.
pub fn validate_update_check_request(request: &UpdateCheckRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(name) = &request.name {
        errors.extend(validate_name(name));
    }

    match (request.check_type, &request.target) {
        (Some(kind), Some(target)) => errors.extend(validate_target(kind, target)),
        (None, Some(_)) => {
            tracing::debug!("Skipping target validation: update does not carry a check type")
        }
        _ => {}
    }

    if let Some(interval) = &request.interval {
        errors.extend(validate_interval(Some(interval)));
    }

    match (request.check_type, request.typed_config()) {
        (Some(kind), Some(Ok(config))) => errors.extend(validate_config(kind, &config)),
        (Some(kind), Some(Err(error))) => errors.push(
            ValidationError::new(
                "config",
                ValidationErrorKind::Mismatch,
                format!("Config is not a valid {kind} config: {error}"),
            )
            .with_value(request.config.clone().unwrap_or_default()),
        ),
        (None, _) if request.config.is_some() => {
            tracing::debug!("Skipping config validation: update does not carry a check type")
        }
        _ => {}
    }

    tracing::debug!("Validated update request: {} error(s)", errors.len());

    ValidationResult::from_errors(errors)
}
