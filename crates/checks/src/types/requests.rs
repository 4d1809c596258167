use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{check::CheckType, config::CheckConfig};

/// Payload of `POST /api/v1/checks`
///
/// Scalar fields are lenient on the wire: a missing name or target
/// deserializes as empty and the interval is kept as received, so the
/// validator can report every problem at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCreateCheckRequest")]
pub struct CreateCheckRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub check_type: CheckType,

    pub target: String,

    /// Seconds between two runs, required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Number>,

    /// Absent configs are filled in with defaults by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CheckConfig>,
}

impl CreateCheckRequest {
    pub fn new(
        name: impl Into<String>,
        check_type: CheckType,
        target: impl Into<String>,
        interval: i64,
    ) -> Self {
        Self {
            name: name.into(),
            check_type,
            target: target.into(),
            interval: Some(interval.into()),
            config: None,
        }
    }

    pub fn with_config(mut self, config: impl Into<CheckConfig>) -> Self {
        self.config = Some(config.into());
        self
    }
}

#[derive(Deserialize)]
struct RawCreateCheckRequest {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    check_type: CheckType,
    #[serde(default)]
    target: String,
    #[serde(default)]
    interval: Option<Number>,
    #[serde(default)]
    config: Option<Value>,
}

impl TryFrom<RawCreateCheckRequest> for CreateCheckRequest {
    type Error = serde_json::Error;

    fn try_from(raw: RawCreateCheckRequest) -> Result<Self, Self::Error> {
        let config = raw
            .config
            .map(|value| CheckConfig::from_tagged(raw.check_type, value))
            .transpose()?;

        Ok(Self {
            name: raw.name,
            check_type: raw.check_type,
            target: raw.target,
            interval: raw.interval,
            config,
        })
    }
}

/// Payload of `PUT /api/v1/checks/{id}`, every field is optional
///
/// The config is kept as sent: its meaning depends on `type`, which a partial
/// update may leave out. [`UpdateCheckRequest::typed_config`] resolves it
/// when the type is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCheckRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub check_type: Option<CheckType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl UpdateCheckRequest {
    pub fn enabled(enabled: bool) -> Self {
        Self { enabled: Some(enabled), ..Default::default() }
    }

    /// Replace the config, declaring its type along with it
    pub fn with_config(mut self, config: CheckConfig) -> Result<Self, serde_json::Error> {
        self.check_type = Some(config.kind());
        self.config = Some(serde_json::to_value(config)?);
        Ok(self)
    }

    /// Config resolved against the declared type
    ///
    /// `None` when either the config or the type is absent.
    pub fn typed_config(&self) -> Option<Result<CheckConfig, serde_json::Error>> {
        let kind = self.check_type?;
        let value = self.config.clone()?;
        Some(CheckConfig::from_tagged(kind, value))
    }
}

/// Filters for `GET /api/v1/checks`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChecksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub check_type: Option<CheckType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Pagination of `GET /api/v1/checks/{id}/history`
///
/// The API accepts a limit of 1 to 200 and defaults to 50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl HistoryQuery {
    pub fn limit(limit: u32) -> Self {
        Self { limit: Some(limit), offset: None }
    }

    /// One based page of `page_size` items
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            limit: Some(page_size),
            offset: Some(page.saturating_sub(1).saturating_mul(page_size)),
        }
    }
}

/// Payload of `POST /api/v1/checks/{id}/alert-rules`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlertRuleRequest {
    /// Notification channel receiving the alerts
    pub channel_id: i64,
    pub config: AlertRuleConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_recovery: Option<bool>,

    /// Consecutive failures before the first alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_after_failures: Option<u32>,
}
