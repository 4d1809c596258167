//! Structural discrimination of untagged check configs.
//!
//! Configs are normally resolved against the check's declared `type`. Payloads
//! that arrive without one (imports, partial updates) are classified by the
//! keys they carry:
//!
//! 1. `method` and `expectedStatus` → HTTP
//! 2. `port` → TCP
//! 3. `packetSize`, or neither `method` nor `port` → Ping
//!
//! Ping is the residual shape, so an object with no distinguishing keys at
//! all is a valid Ping config.

use serde_json::{Map, Value};

use crate::types::CheckType;

pub fn is_http_config(config: &Map<String, Value>) -> bool {
    config.contains_key("method") && config.contains_key("expectedStatus")
}

pub fn is_tcp_config(config: &Map<String, Value>) -> bool {
    config.contains_key("port")
}

pub fn is_ping_config(config: &Map<String, Value>) -> bool {
    config.contains_key("packetSize")
        || (!config.contains_key("method") && !config.contains_key("port"))
}

/// Kind of an untagged config, `None` when it matches no shape
pub fn discriminate(config: &Map<String, Value>) -> Option<CheckType> {
    if is_http_config(config) {
        Some(CheckType::Http)
    } else if is_tcp_config(config) {
        Some(CheckType::Tcp)
    } else if is_ping_config(config) {
        Some(CheckType::Ping)
    } else {
        None
    }
}

/// Same as [`discriminate`] for arbitrary JSON, non objects have no kind
pub fn discriminate_value(config: &Value) -> Option<CheckType> {
    config.as_object().and_then(discriminate)
}
