use serde_json::Number;

use super::{ValidationError, ValidationErrorKind, as_integer, limits};
use crate::{target, types::CheckType};

/// Validate a check name
pub fn validate_name(name: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(
            ValidationError::new("name", ValidationErrorKind::Required, "Name is required")
                .with_value(name),
        );
    } else if name.chars().count() > limits::NAME_MAX_CHARS {
        errors.push(
            ValidationError::new(
                "name",
                ValidationErrorKind::Range,
                format!("Name exceeds max length of {} characters", limits::NAME_MAX_CHARS),
            )
            .with_value(name),
        );
    }

    errors
}

/// Validate a target against the check type it is meant for
///
/// An empty target only reports that it is required.
pub fn validate_target(kind: CheckType, target: &str) -> Vec<ValidationError> {
    if target.trim().is_empty() {
        return vec![
            ValidationError::new("target", ValidationErrorKind::Required, "Target is required")
                .with_value(target),
        ];
    }

    if target::classify_target(kind, target) {
        return Vec::new();
    }

    let message = match kind {
        CheckType::Http => "Target must be a valid URL (http:// or https://)",
        CheckType::Tcp | CheckType::Ping => "Target must be a valid IPv4 address or hostname",
    };

    vec![ValidationError::new("target", ValidationErrorKind::Format, message).with_value(target)]
}

/// Validate the check interval in seconds
///
/// A missing, fractional or out of range interval yields a single error.
pub fn validate_interval(interval: Option<&Number>) -> Vec<ValidationError> {
    let message = format!(
        "Interval must be between {} and {} seconds",
        limits::INTERVAL_SECS.start(),
        limits::INTERVAL_SECS.end()
    );

    let Some(interval) = interval else {
        return vec![ValidationError::new("interval", ValidationErrorKind::Required, message)];
    };

    if as_integer(interval).is_some_and(|secs| limits::INTERVAL_SECS.contains(&secs)) {
        return Vec::new();
    }

    vec![
        ValidationError::new("interval", ValidationErrorKind::Range, message)
            .with_value(interval.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("My Website Check").is_empty());
        assert!(validate_name(&"a".repeat(255)).is_empty());

        let empty = validate_name("");
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].field, "name");
        assert_eq!(empty[0].kind, ValidationErrorKind::Required);
        assert!(empty[0].message.contains("required"));

        assert_eq!(validate_name("   ")[0].kind, ValidationErrorKind::Required);

        let long = validate_name(&"a".repeat(256));
        assert_eq!(long.len(), 1);
        assert!(long[0].message.contains("max length"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_name(&"я".repeat(255)).is_empty());
    }

    #[test]
    fn test_target_validation() {
        assert!(validate_target(CheckType::Http, "https://example.com").is_empty());
        assert!(validate_target(CheckType::Tcp, "192.168.1.1").is_empty());
        assert!(validate_target(CheckType::Ping, "google.com").is_empty());

        let bad_url = validate_target(CheckType::Http, "not-a-url");
        assert_eq!(bad_url.len(), 1);
        assert_eq!(bad_url[0].kind, ValidationErrorKind::Format);
        assert!(bad_url[0].message.contains("must be a valid URL"));

        let bad_host = validate_target(CheckType::Tcp, "999.999.999.999");
        assert_eq!(bad_host.len(), 1);
        assert_eq!(bad_host[0].kind, ValidationErrorKind::Format);
    }

    #[test]
    fn test_empty_target_short_circuits() {
        for kind in CheckType::ALL {
            let errors = validate_target(kind, " ");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::Required);
        }
    }

    fn interval(secs: i64) -> Vec<ValidationError> {
        validate_interval(Some(&secs.into()))
    }

    #[test]
    fn test_interval_bounds() {
        assert!(interval(5).is_empty());
        assert!(interval(300).is_empty());
        assert!(interval(86_400).is_empty());

        assert_eq!(interval(4).len(), 1);
        assert_eq!(interval(86_401).len(), 1);
        assert_eq!(interval(-60).len(), 1);
        assert!(interval(1)[0].message.contains("between 5 and 86400"));
    }

    #[test]
    fn test_interval_must_be_present_and_integral() {
        let missing = validate_interval(None);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].kind, ValidationErrorKind::Required);

        let fractional = validate_interval(Number::from_f64(60.5).as_ref());
        assert_eq!(fractional.len(), 1);
        assert_eq!(fractional[0].kind, ValidationErrorKind::Range);
        assert_eq!(fractional[0].value, Some(serde_json::json!(60.5)));

        assert!(validate_interval(Number::from_f64(60.0).as_ref()).is_empty());
    }
}
