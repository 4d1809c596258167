use serde_json::Number;

use super::{ValidationError, ValidationErrorKind, as_integer, limits};
use crate::types::{
    CheckConfig, CheckType, ContentCheckType, HttpConfig, HttpMethod, PingConfig, TcpConfig,
};

pub fn timeout_in_range(timeout_ms: i64) -> bool {
    limits::TIMEOUT_MS.contains(&timeout_ms)
}

pub fn expected_status_in_range(codes: &[i64]) -> bool {
    codes.iter().all(|code| limits::STATUS_CODE.contains(code))
}

pub fn port_in_range(port: i64) -> bool {
    limits::PORT.contains(&port)
}

pub fn packet_size_in_range(packet_size: i64) -> bool {
    limits::PACKET_SIZE.contains(&packet_size)
}

/// Range error for `value` unless it is an integer accepted by `in_range`
fn integer_in(
    field: &str,
    value: &Number,
    in_range: impl Fn(i64) -> bool,
    message: String,
) -> Option<ValidationError> {
    if as_integer(value).is_some_and(in_range) {
        return None;
    }
    Some(
        ValidationError::new(field, ValidationErrorKind::Range, message)
            .with_value(value.clone()),
    )
}

/// Validate a config against the declared check type
///
/// Shared timing fields are checked first, then the fields specific to the
/// variant. A config whose variant is not the declared type yields a single
/// mismatch error.
pub fn validate_config(kind: CheckType, config: &CheckConfig) -> Vec<ValidationError> {
    if config.kind() != kind {
        return vec![ValidationError::new(
            "config",
            ValidationErrorKind::Mismatch,
            format!("Config shape '{}' does not match check type '{kind}'", config.kind()),
        )];
    }

    let mut errors = validate_timings(config);

    match config {
        CheckConfig::Http(http) => errors.extend(validate_http_config(http)),
        CheckConfig::Tcp(tcp) => errors.extend(validate_tcp_config(tcp)),
        CheckConfig::Ping(ping) => errors.extend(validate_ping_config(ping)),
    }

    errors
}

fn validate_timings(config: &CheckConfig) -> Vec<ValidationError> {
    let timeout = config.timeout_ms().and_then(|timeout| {
        integer_in(
            "config.timeoutMs",
            timeout,
            timeout_in_range,
            format!(
                "Timeout must be between {} and {} ms",
                limits::TIMEOUT_MS.start(),
                limits::TIMEOUT_MS.end()
            ),
        )
    });

    let threshold = config.degraded_threshold_ms().and_then(|threshold| {
        integer_in(
            "config.degraded_threshold_ms",
            threshold,
            |ms| limits::DEGRADED_THRESHOLD_MS.contains(&ms),
            format!(
                "Degraded threshold must be between {} and {} ms",
                limits::DEGRADED_THRESHOLD_MS.start(),
                limits::DEGRADED_THRESHOLD_MS.end()
            ),
        )
    });

    timeout.into_iter().chain(threshold).collect()
}

fn validate_http_config(config: &HttpConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.parsed_method().is_none() {
        let allowed: Vec<&str> = HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
        let error = match &config.method {
            Some(method) => ValidationError::new(
                "config.method",
                ValidationErrorKind::Enum,
                format!("HTTP method must be one of: {}", allowed.join(", ")),
            )
            .with_value(method.as_str()),
            None => ValidationError::new(
                "config.method",
                ValidationErrorKind::Required,
                format!("HTTP method is required, one of: {}", allowed.join(", ")),
            ),
        };
        errors.push(error);
    }

    match &config.expected_status {
        // One error per offending code
        Some(expected) => errors.extend(expected.codes().iter().filter_map(|code| {
            integer_in(
                "config.expectedStatus",
                code,
                |code| expected_status_in_range(&[code]),
                format!(
                    "HTTP status codes must be between {} and {}",
                    limits::STATUS_CODE.start(),
                    limits::STATUS_CODE.end()
                ),
            )
        })),
        None => errors.push(ValidationError::new(
            "config.expectedStatus",
            ValidationErrorKind::Required,
            "Expected HTTP status is required",
        )),
    }

    if let Some(content_check) = &config.content_check {
        match content_check.parsed_kind() {
            None => {
                let allowed: Vec<&str> =
                    ContentCheckType::ALL.iter().map(|t| t.as_str()).collect();
                errors.push(
                    ValidationError::new(
                        "config.content_check.type",
                        ValidationErrorKind::Enum,
                        format!("Content check type must be one of: {}", allowed.join(", ")),
                    )
                    .with_value(content_check.kind.as_str()),
                );
            }
            Some(ContentCheckType::Regex)
                if content_check.pattern.as_deref().is_none_or(str::is_empty) =>
            {
                let error = ValidationError::new(
                    "config.content_check.pattern",
                    ValidationErrorKind::ConditionalRequired,
                    "A pattern is required for REGEX content checks",
                );
                errors.push(match &content_check.pattern {
                    Some(pattern) => error.with_value(pattern.as_str()),
                    None => error,
                });
            }
            Some(_) => {}
        }
    }

    errors
}

fn validate_tcp_config(config: &TcpConfig) -> Vec<ValidationError> {
    let message =
        format!("Port must be between {} and {}", limits::PORT.start(), limits::PORT.end());

    match &config.port {
        Some(port) => integer_in("config.port", port, port_in_range, message).into_iter().collect(),
        None => vec![ValidationError::new("config.port", ValidationErrorKind::Required, message)],
    }
}

fn validate_ping_config(config: &PingConfig) -> Vec<ValidationError> {
    config
        .packet_size
        .as_ref()
        .and_then(|size| {
            integer_in(
                "config.packetSize",
                size,
                packet_size_in_range,
                format!(
                    "Packet size must be between {} and {} bytes",
                    limits::PACKET_SIZE.start(),
                    limits::PACKET_SIZE.end()
                ),
            )
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentCheck, ExpectedStatus};
    use serde_json::json;

    fn http_config() -> HttpConfig {
        HttpConfig {
            timeout_ms: Some(5000.into()),
            degraded_threshold_ms: Some(3000.into()),
            ..HttpConfig::new(HttpMethod::Get, 200)
        }
    }

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    fn number(value: f64) -> Number {
        Number::from_f64(value).unwrap()
    }

    #[test]
    fn test_range_predicates() {
        assert!(expected_status_in_range(&[200]));
        assert!(expected_status_in_range(&[200, 201]));
        assert!(!expected_status_in_range(&[99]));
        assert!(!expected_status_in_range(&[600]));
        assert!(!expected_status_in_range(&[200, 99]));

        assert!(timeout_in_range(5000));
        assert!(!timeout_in_range(500));
        assert!(!timeout_in_range(70_000));

        assert!(port_in_range(80));
        assert!(port_in_range(65_535));
        assert!(!port_in_range(0));
        assert!(!port_in_range(65_536));

        assert!(packet_size_in_range(32));
        assert!(packet_size_in_range(65_507));
        assert!(!packet_size_in_range(0));
        assert!(!packet_size_in_range(65_508));
    }

    #[test]
    fn test_valid_http_config() {
        let config = CheckConfig::Http(http_config());
        assert!(validate_config(CheckType::Http, &config).is_empty());
    }

    #[test]
    fn test_http_config_errors() {
        let config = CheckConfig::Http(HttpConfig {
            method: Some("PATCH".into()),
            expected_status: Some(ExpectedStatus::from(vec![200, 99, 600])),
            timeout_ms: Some(500.into()),
            degraded_threshold_ms: Some(50.into()),
            ..http_config()
        });

        let errors = validate_config(CheckType::Http, &config);
        assert_eq!(
            fields(&errors),
            vec![
                "config.timeoutMs",
                "config.degraded_threshold_ms",
                "config.method",
                "config.expectedStatus",
                "config.expectedStatus",
            ]
        );
        assert_eq!(errors[2].kind, ValidationErrorKind::Enum);
        assert_eq!(errors[3].value, Some(json!(99)));
        assert_eq!(errors[4].value, Some(json!(600)));
    }

    #[test]
    fn test_http_config_missing_fields() {
        let errors = validate_config(CheckType::Http, &CheckConfig::Http(HttpConfig::default()));

        assert_eq!(fields(&errors), vec!["config.method", "config.expectedStatus"]);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::Required));
    }

    #[test]
    fn test_fractional_status_code() {
        let config = CheckConfig::Http(HttpConfig {
            expected_status: Some(ExpectedStatus::Single(number(200.5))),
            ..http_config()
        });

        let errors = validate_config(CheckType::Http, &config);
        assert_eq!(fields(&errors), vec!["config.expectedStatus"]);
        assert_eq!(errors[0].value, Some(json!(200.5)));
    }

    #[test]
    fn test_content_check_rules() {
        let with_check = |kind: &str, pattern: Option<&str>| {
            CheckConfig::Http(HttpConfig {
                content_check: Some(ContentCheck {
                    kind: kind.into(),
                    key: None,
                    expected_value: None,
                    pattern: pattern.map(Into::into),
                }),
                ..http_config()
            })
        };

        assert!(validate_config(CheckType::Http, &with_check("TEXT_CONTAINS", None)).is_empty());
        assert!(validate_config(CheckType::Http, &with_check("REGEX", Some("^ok$"))).is_empty());

        let unknown = validate_config(CheckType::Http, &with_check("XPATH", None));
        assert_eq!(fields(&unknown), vec!["config.content_check.type"]);
        assert_eq!(unknown[0].kind, ValidationErrorKind::Enum);

        for pattern in [None, Some("")] {
            let missing = validate_config(CheckType::Http, &with_check("REGEX", pattern));
            assert_eq!(fields(&missing), vec!["config.content_check.pattern"]);
            assert_eq!(missing[0].kind, ValidationErrorKind::ConditionalRequired);
        }
    }

    #[test]
    fn test_tcp_port_bounds() {
        let tcp = |port| CheckConfig::Tcp(TcpConfig::new(port));

        assert!(validate_config(CheckType::Tcp, &tcp(1)).is_empty());
        assert!(validate_config(CheckType::Tcp, &tcp(65_535)).is_empty());
        assert_eq!(fields(&validate_config(CheckType::Tcp, &tcp(0))), vec!["config.port"]);
        assert_eq!(fields(&validate_config(CheckType::Tcp, &tcp(70_000))), vec!["config.port"]);
    }

    #[test]
    fn test_tcp_port_required_and_integral() {
        let missing = validate_config(CheckType::Tcp, &CheckConfig::Tcp(TcpConfig::default()));
        assert_eq!(fields(&missing), vec!["config.port"]);
        assert_eq!(missing[0].kind, ValidationErrorKind::Required);

        let fractional =
            CheckConfig::Tcp(TcpConfig { port: Some(number(80.5)), ..Default::default() });
        let errors = validate_config(CheckType::Tcp, &fractional);
        assert_eq!(errors[0].kind, ValidationErrorKind::Range);
        assert_eq!(errors[0].value, Some(json!(80.5)));
    }

    #[test]
    fn test_ping_packet_size_optional() {
        let ping = |packet_size: Option<i64>| {
            CheckConfig::Ping(PingConfig {
                packet_size: packet_size.map(Into::into),
                ..Default::default()
            })
        };

        assert!(validate_config(CheckType::Ping, &ping(None)).is_empty());
        assert!(validate_config(CheckType::Ping, &ping(Some(64))).is_empty());
        assert_eq!(
            fields(&validate_config(CheckType::Ping, &ping(Some(65_508)))),
            vec!["config.packetSize"]
        );
    }

    #[test]
    fn test_zero_timeout_is_out_of_range() {
        let config =
            CheckConfig::Ping(PingConfig { timeout_ms: Some(0.into()), ..Default::default() });
        assert_eq!(fields(&validate_config(CheckType::Ping, &config)), vec!["config.timeoutMs"]);
    }

    #[test]
    fn test_mismatched_config() {
        let config = CheckConfig::Ping(PingConfig::default());
        let errors = validate_config(CheckType::Http, &config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "config");
        assert_eq!(errors[0].kind, ValidationErrorKind::Mismatch);
    }
}
