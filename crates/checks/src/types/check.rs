use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::CheckConfig;

/// Kind of test a check performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    Http,
    Tcp,
    Ping,
}

impl CheckType {
    pub const ALL: [CheckType; 3] = [CheckType::Http, CheckType::Tcp, CheckType::Ping];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckType::Http => "http",
            CheckType::Tcp => "tcp",
            CheckType::Ping => "ping",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(CheckType::Http),
            "tcp" => Ok(CheckType::Tcp),
            "ping" => Ok(CheckType::Ping),
            other => Err(format!("Unknown check type: {other}")),
        }
    }
}

/// Last known state of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Up,
    Down,
    Degraded,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Up => write!(f, "UP"),
            CheckStatus::Down => write!(f, "DOWN"),
            CheckStatus::Degraded => write!(f, "DEGRADED"),
        }
    }
}

/// A check as stored by the checks API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCheck")]
pub struct Check {
    pub id: i64,
    pub name: String,

    #[serde(rename = "type")]
    pub check_type: CheckType,

    /// URL, hostname or IPv4 address being monitored
    pub target: String,

    /// Seconds between two runs
    pub interval: i64,

    pub config: CheckConfig,
    pub enabled: bool,
    pub user_id: i64,

    /// ISO 8601 timestamps
    pub created_at: String,
    pub updated_at: String,
}

/// Wire form of [`Check`]: the config is resolved against `type` afterwards.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCheck {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    check_type: CheckType,
    target: String,
    interval: i64,
    config: Value,
    enabled: bool,
    user_id: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<RawCheck> for Check {
    type Error = serde_json::Error;

    fn try_from(raw: RawCheck) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            name: raw.name,
            check_type: raw.check_type,
            target: raw.target,
            interval: raw.interval,
            config: CheckConfig::from_tagged(raw.check_type, raw.config)?,
            enabled: raw.enabled,
            user_id: raw.user_id,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_type_parsing() {
        assert_eq!("http".parse::<CheckType>().unwrap(), CheckType::Http);
        assert_eq!("TCP".parse::<CheckType>().unwrap(), CheckType::Tcp);
        assert_eq!("Ping".parse::<CheckType>().unwrap(), CheckType::Ping);
        assert!("icmp".parse::<CheckType>().is_err());
    }

    #[test]
    fn test_check_config_follows_declared_type() {
        let check: Check = serde_json::from_value(json!({
            "id": 7,
            "name": "Postgres",
            "type": "tcp",
            "target": "db.example.com",
            "interval": 300,
            "config": { "port": 5432, "timeoutMs": 8000, "degraded_threshold_ms": 3000 },
            "enabled": true,
            "userId": 1,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(check.check_type, CheckType::Tcp);
        assert!(matches!(check.config, CheckConfig::Tcp(ref tcp) if tcp.port == Some(5432.into())));

        let back = serde_json::to_value(&check).unwrap();
        assert_eq!(back["type"], "tcp");
        assert_eq!(back["userId"], 1);
        assert_eq!(back["config"]["port"], 5432);
    }
}
