//! Validation of check requests.
//!
//! Every validator is a pure function returning zero or more
//! [`ValidationError`]s. Request level validators concatenate the errors of
//! every field in order and never stop at the first failure.

mod config;
mod fields;
mod request;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub use config::{
    expected_status_in_range, packet_size_in_range, port_in_range, timeout_in_range,
    validate_config,
};
pub use fields::{validate_interval, validate_name, validate_target};
pub use request::{validate_create_check_request, validate_update_check_request};

/// Bounds enforced by the validators
pub mod limits {
    use std::ops::RangeInclusive;

    pub const NAME_MAX_CHARS: usize = 255;
    /// Seconds, up to 24 hours
    pub const INTERVAL_SECS: RangeInclusive<i64> = 5..=86_400;
    pub const TIMEOUT_MS: RangeInclusive<i64> = 1_000..=60_000;
    pub const DEGRADED_THRESHOLD_MS: RangeInclusive<i64> = 100..=60_000;
    pub const STATUS_CODE: RangeInclusive<i64> = 100..=599;
    pub const PORT: RangeInclusive<i64> = 1..=65_535;
    /// Largest ICMP payload that fits an IPv4 datagram
    pub const PACKET_SIZE: RangeInclusive<i64> = 1..=65_507;
}

/// Integer value of a JSON number, `None` for fractions
///
/// Integral floats such as `60.0` count as integers.
pub(crate) fn as_integer(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Field missing or empty
    Required,
    /// Number outside its bounds or not an integer
    Range,
    /// Value outside a fixed set
    Enum,
    /// Target does not fit its check type
    Format,
    /// Field required by the value of another field
    ConditionalRequired,
    /// Config shape differs from the declared check type
    Mismatch,
    /// Reported by the checks API, no local category
    #[default]
    Remote,
}

/// A single field level failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted path, e.g. `config.timeoutMs`
    pub field: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default)]
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self { field: field.into(), message: message.into(), value: None, kind }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating a whole request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }

    /// Errors reported for one field path
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |error| error.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_serialization() {
        let result = ValidationResult::from_errors(vec![
            ValidationError::new("interval", ValidationErrorKind::Range, "too small").with_value(1),
        ]);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "isValid": false,
                "errors": [
                    { "field": "interval", "message": "too small", "value": 1, "kind": "range" }
                ]
            })
        );
    }

    #[test]
    fn test_integer_numbers() {
        let number = |value: Value| serde_json::from_value::<Number>(value).unwrap();

        assert_eq!(as_integer(&number(json!(60))), Some(60));
        assert_eq!(as_integer(&number(json!(-5))), Some(-5));
        assert_eq!(as_integer(&number(json!(60.0))), Some(60));
        assert_eq!(as_integer(&number(json!(60.5))), None);
        assert_eq!(as_integer(&number(json!(1e300))), None);
    }

    #[test]
    fn test_remote_errors_default_kind() {
        let error: ValidationError =
            serde_json::from_value(json!({ "field": "name", "message": "taken" })).unwrap();

        assert_eq!(error.kind, ValidationErrorKind::Remote);
        assert_eq!(error.value, None);
        assert_eq!(error.to_string(), "name: taken");
    }
}
