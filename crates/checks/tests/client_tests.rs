//! Checks client tests
//!
//! The client points at a closed local port; invalid payloads must be
//! rejected before any connection is attempted.

use std::time::Duration;

use pingtower_checks::{
    CheckType, ChecksApiError, ChecksClient, CreateCheckRequest, UpdateCheckRequest,
};
use url::Url;

fn offline_client() -> ChecksClient {
    let _ = tracing_subscriber::fmt::try_init();

    let base = Url::parse("http://127.0.0.1:1/").unwrap();
    ChecksClient::new(base, Duration::from_secs(2)).unwrap().with_token("test-token")
}

#[tokio::test]
async fn test_invalid_create_fails_before_sending() {
    let client = offline_client();
    let request = CreateCheckRequest::new("", CheckType::Http, "not-a-url", 1);

    let error = client.create_check(&request).await.unwrap_err();
    let ChecksApiError::Validation { errors, .. } = &error else {
        panic!("expected a validation error, got {error:?}");
    };

    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "target", "interval"]);
    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_invalid_update_fails_before_sending() {
    let client = offline_client();
    let request = UpdateCheckRequest { interval: Some(100_000.into()), ..Default::default() };

    let error = client.update_check(42, &request).await.unwrap_err();
    assert!(matches!(error, ChecksApiError::Validation { .. }), "got {error:?}");
}
