use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use super::check::CheckType;
use crate::discriminate::discriminate;

/// Packet size used by ping checks that do not set one
pub const DEFAULT_PACKET_SIZE: i64 = 32;

/// HTTP methods a check may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Head,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    /// Exact match only, the API is case sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL.into_iter().find(|m| m.as_str() == s).ok_or(())
    }
}

/// Kinds of response body assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentCheckType {
    JsonContains,
    TextContains,
    Regex,
}

impl ContentCheckType {
    pub const ALL: [ContentCheckType; 3] = [
        ContentCheckType::JsonContains,
        ContentCheckType::TextContains,
        ContentCheckType::Regex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentCheckType::JsonContains => "JSON_CONTAINS",
            ContentCheckType::TextContains => "TEXT_CONTAINS",
            ContentCheckType::Regex => "REGEX",
        }
    }
}

impl fmt::Display for ContentCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCheckType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentCheckType::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// Accepted status code(s): `200` or `[200, 201, 202]`
///
/// Codes are kept as received so that fractional codes reach the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedStatus {
    Single(Number),
    Many(Vec<Number>),
}

impl ExpectedStatus {
    pub fn codes(&self) -> &[Number] {
        match self {
            ExpectedStatus::Single(code) => std::slice::from_ref(code),
            ExpectedStatus::Many(codes) => codes,
        }
    }
}

impl From<i64> for ExpectedStatus {
    fn from(code: i64) -> Self {
        ExpectedStatus::Single(code.into())
    }
}

impl From<Vec<i64>> for ExpectedStatus {
    fn from(codes: Vec<i64>) -> Self {
        ExpectedStatus::Many(codes.into_iter().map(Number::from).collect())
    }
}

/// Assertion on the response body of an HTTP check
///
/// `kind` is kept as received so that unknown kinds can be reported by the
/// validator; use [`ContentCheck::parsed_kind`] for the typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCheck {
    #[serde(rename = "type")]
    pub kind: String,

    /// JSON path for `JSON_CONTAINS`, e.g. `status` or `data.result`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<Value>,

    /// Required for `REGEX`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ContentCheck {
    pub fn parsed_kind(&self) -> Option<ContentCheckType> {
        self.kind.parse().ok()
    }
}

/// Config of an HTTP check
///
/// Required fields are optional here: a missing `method` or
/// `expectedStatus` is reported by the validator along with every other
/// error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(rename = "expectedStatus", default, skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<ExpectedStatus>,

    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded_threshold_ms: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_check_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_check: Option<ContentCheck>,
}

impl HttpConfig {
    pub fn new(method: HttpMethod, expected_status: impl Into<ExpectedStatus>) -> Self {
        Self {
            method: Some(method.to_string()),
            expected_status: Some(expected_status.into()),
            ..Default::default()
        }
    }

    pub fn parsed_method(&self) -> Option<HttpMethod> {
        self.method.as_deref()?.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Required, checked by the validator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Number>,

    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded_threshold_ms: Option<Number>,
}

impl TcpConfig {
    pub fn new(port: i64) -> Self {
        Self { port: Some(port.into()), ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PingConfig {
    /// [`DEFAULT_PACKET_SIZE`] when absent
    #[serde(rename = "packetSize", default, skip_serializing_if = "Option::is_none")]
    pub packet_size: Option<Number>,

    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded_threshold_ms: Option<Number>,
}

/// Type specific configuration of a check
///
/// Serialized without a tag. When deserialized on its own the variant is
/// picked by [`discriminate`]; requests and stored checks resolve it against
/// their declared `type` through [`CheckConfig::from_tagged`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckConfig {
    Http(HttpConfig),
    Tcp(TcpConfig),
    Ping(PingConfig),
}

impl CheckConfig {
    /// Build the variant named by the declared check type
    pub fn from_tagged(kind: CheckType, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            CheckType::Http => CheckConfig::Http(serde_json::from_value(value)?),
            CheckType::Tcp => CheckConfig::Tcp(serde_json::from_value(value)?),
            CheckType::Ping => CheckConfig::Ping(serde_json::from_value(value)?),
        })
    }

    /// Build a config from a payload that carries no check type
    pub fn from_untagged(value: Value) -> Result<Self, serde_json::Error> {
        let Some(object) = value.as_object() else {
            return Err(serde::de::Error::custom("check config must be an object"));
        };

        match discriminate(object) {
            Some(kind) => Self::from_tagged(kind, value),
            None => Err(serde::de::Error::custom(
                "check config does not match any known shape (http, tcp or ping)",
            )),
        }
    }

    pub fn kind(&self) -> CheckType {
        match self {
            CheckConfig::Http(_) => CheckType::Http,
            CheckConfig::Tcp(_) => CheckType::Tcp,
            CheckConfig::Ping(_) => CheckType::Ping,
        }
    }

    pub fn timeout_ms(&self) -> Option<&Number> {
        match self {
            CheckConfig::Http(c) => c.timeout_ms.as_ref(),
            CheckConfig::Tcp(c) => c.timeout_ms.as_ref(),
            CheckConfig::Ping(c) => c.timeout_ms.as_ref(),
        }
    }

    pub fn degraded_threshold_ms(&self) -> Option<&Number> {
        match self {
            CheckConfig::Http(c) => c.degraded_threshold_ms.as_ref(),
            CheckConfig::Tcp(c) => c.degraded_threshold_ms.as_ref(),
            CheckConfig::Ping(c) => c.degraded_threshold_ms.as_ref(),
        }
    }
}

impl<'de> Deserialize<'de> for CheckConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CheckConfig::from_untagged(value).map_err(serde::de::Error::custom)
    }
}

impl From<HttpConfig> for CheckConfig {
    fn from(config: HttpConfig) -> Self {
        CheckConfig::Http(config)
    }
}

impl From<TcpConfig> for CheckConfig {
    fn from(config: TcpConfig) -> Self {
        CheckConfig::Tcp(config)
    }
}

impl From<PingConfig> for CheckConfig {
    fn from(config: PingConfig) -> Self {
        CheckConfig::Ping(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parsing_is_exact() {
        assert_eq!("GET".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("HEAD".parse::<HttpMethod>(), Ok(HttpMethod::Head));
        assert!("get".parse::<HttpMethod>().is_err());
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_expected_status_shapes() {
        let single: ExpectedStatus = serde_json::from_value(json!(200)).unwrap();
        let many: ExpectedStatus = serde_json::from_value(json!([200, 201])).unwrap();

        assert_eq!(single, ExpectedStatus::from(200));
        assert_eq!(many, ExpectedStatus::from(vec![200, 201]));
        assert_eq!(many.codes().len(), 2);

        let fractional: ExpectedStatus = serde_json::from_value(json!(200.5)).unwrap();
        assert_eq!(fractional.codes()[0].as_i64(), None);
    }

    #[test]
    fn test_untagged_config_uses_structure() {
        let http: CheckConfig = serde_json::from_value(json!({
            "method": "GET",
            "expectedStatus": [200, 204],
            "timeoutMs": 5000
        }))
        .unwrap();
        assert_eq!(http.kind(), CheckType::Http);

        let tcp: CheckConfig = serde_json::from_value(json!({ "port": 443 })).unwrap();
        assert_eq!(tcp.kind(), CheckType::Tcp);

        let ping: CheckConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ping, CheckConfig::Ping(PingConfig::default()));

        assert!(serde_json::from_value::<CheckConfig>(json!({ "method": "GET" })).is_err());
        assert!(serde_json::from_value::<CheckConfig>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_tagged_config_leaves_required_fields_to_the_validator() {
        let tcp = CheckConfig::from_tagged(CheckType::Tcp, json!({ "timeoutMs": 5000 })).unwrap();
        assert_eq!(
            tcp,
            CheckConfig::Tcp(TcpConfig { timeout_ms: Some(5000.into()), ..Default::default() })
        );

        let http = CheckConfig::from_tagged(CheckType::Http, json!({ "method": "GET" })).unwrap();
        assert!(matches!(http, CheckConfig::Http(ref c) if c.expected_status.is_none()));

        let fractional =
            CheckConfig::from_tagged(CheckType::Tcp, json!({ "port": 80.5 })).unwrap();
        let CheckConfig::Tcp(tcp) = fractional else {
            panic!("expected a tcp config");
        };
        assert_eq!(tcp.port.and_then(|port| port.as_f64()), Some(80.5));
    }

    #[test]
    fn test_tagged_config_rejects_wrong_json_types() {
        assert!(CheckConfig::from_tagged(CheckType::Tcp, json!({ "port": "80" })).is_err());
        assert!(CheckConfig::from_tagged(CheckType::Http, json!("GET")).is_err());
    }

    #[test]
    fn test_ping_config_serialization_keeps_absent_fields_absent() {
        let config =
            CheckConfig::Ping(PingConfig { timeout_ms: Some(3000.into()), ..Default::default() });
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "timeoutMs": 3000 }));
    }
}
