//! Built-in configuration templates.
//!
//! These are the defaults offered when a user creates a new check, and the
//! examples served by the public examples endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::types::{
    CheckConfig, CheckType, ContentCheck, ContentCheckType, CreateCheckRequest, ExpectedStatus,
    HttpConfig, HttpMethod, PingConfig, TcpConfig, config::DEFAULT_PACKET_SIZE,
};

/// Variants known for each check type, the first one is the fallback
pub fn variants(kind: CheckType) -> &'static [&'static str] {
    match kind {
        CheckType::Http => &["basic", "advanced"],
        CheckType::Tcp => &["basic", "database"],
        CheckType::Ping => &["basic", "fast"],
    }
}

/// Default config for a check type, unknown variants fall back to `basic`
pub fn default_config(kind: CheckType, variant: &str) -> CheckConfig {
    match (kind, variant) {
        (CheckType::Http, "advanced") => CheckConfig::Http(HttpConfig {
            timeout_ms: Some(8000.into()),
            degraded_threshold_ms: Some(4000.into()),
            headers: Some(BTreeMap::from([(
                "User-Agent".to_string(),
                "PingTower/1.0".to_string(),
            )])),
            ssl_check_enabled: Some(true),
            content_check: Some(ContentCheck {
                kind: ContentCheckType::JsonContains.to_string(),
                key: Some("status".into()),
                expected_value: Some(json!("ok")),
                pattern: None,
            }),
            ..HttpConfig::new(HttpMethod::Get, vec![200, 201, 202])
        }),
        (CheckType::Http, _) => CheckConfig::Http(HttpConfig {
            timeout_ms: Some(5000.into()),
            degraded_threshold_ms: Some(3000.into()),
            ..HttpConfig::new(HttpMethod::Get, 200)
        }),
        (CheckType::Tcp, "database") => CheckConfig::Tcp(TcpConfig {
            timeout_ms: Some(8000.into()),
            degraded_threshold_ms: Some(3000.into()),
            ..TcpConfig::new(5432)
        }),
        (CheckType::Tcp, _) => CheckConfig::Tcp(TcpConfig {
            timeout_ms: Some(5000.into()),
            degraded_threshold_ms: Some(2000.into()),
            ..TcpConfig::new(80)
        }),
        (CheckType::Ping, "fast") => CheckConfig::Ping(PingConfig {
            packet_size: Some(16.into()),
            timeout_ms: Some(1000.into()),
            degraded_threshold_ms: Some(200.into()),
        }),
        (CheckType::Ping, _) => CheckConfig::Ping(PingConfig {
            packet_size: Some(DEFAULT_PACKET_SIZE.into()),
            timeout_ms: Some(3000.into()),
            degraded_threshold_ms: Some(500.into()),
        }),
    }
}

/// Interval suggested for new checks: ping more often than the rest
pub fn default_interval(kind: CheckType) -> i64 {
    match kind {
        CheckType::Ping => 60,
        CheckType::Http | CheckType::Tcp => 300,
    }
}

/// Ready to submit check built from a template
pub fn create_check_template(
    kind: CheckType,
    name: impl Into<String>,
    target: impl Into<String>,
    variant: &str,
) -> CreateCheckRequest {
    CreateCheckRequest::new(name, kind, target, default_interval(kind))
        .with_config(default_config(kind, variant))
}

/// Examples served by `GET /api/v1/public/checks/examples`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckExamples {
    pub basic_http: CreateCheckRequest,
    pub advanced_http: CreateCheckRequest,
    pub tcp_check: CreateCheckRequest,
    pub ping_check: CreateCheckRequest,
    pub multi_status_http: CreateCheckRequest,
    pub high_perf_ping: CreateCheckRequest,
}

impl Default for CheckExamples {
    fn default() -> Self {
        let mut multi_status_http = create_check_template(
            CheckType::Http,
            "API with several success codes",
            "https://api.example.com/items",
            "basic",
        );
        if let Some(CheckConfig::Http(http)) = &mut multi_status_http.config {
            http.method = Some(HttpMethod::Post.to_string());
            http.expected_status = Some(ExpectedStatus::from(vec![200, 201, 204]));
        }

        let mut high_perf_ping =
            create_check_template(CheckType::Ping, "Fast ping", "1.1.1.1", "fast");
        high_perf_ping.interval = Some(30.into());

        Self {
            basic_http: create_check_template(
                CheckType::Http,
                "Website",
                "https://example.com",
                "basic",
            ),
            advanced_http: create_check_template(
                CheckType::Http,
                "API health",
                "https://api.example.com/health",
                "advanced",
            ),
            tcp_check: create_check_template(
                CheckType::Tcp,
                "Database",
                "db.example.com",
                "database",
            ),
            ping_check: create_check_template(CheckType::Ping, "Google DNS", "8.8.8.8", "basic"),
            multi_status_http,
            high_perf_ping,
        }
    }
}
