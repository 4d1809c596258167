//! Target classification.
//!
//! HTTP checks target an absolute `http`/`https` URL. TCP and Ping checks target
//! a host, given either as an IPv4 dotted quad or as a DNS hostname.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::types::CheckType;

const MAX_HOSTNAME_LENGTH: usize = 253;

/// Dot-joined labels of 1-63 alphanumerics/hyphens, no hyphen at either end
fn hostname_regex() -> Option<&'static Regex> {
    static HOSTNAME_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    HOSTNAME_REGEX
        .get_or_init(|| {
            Regex::new(concat!(
                r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
                r"(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            ))
            .inspect_err(|error| tracing::error!("Hostname pattern failed to compile: {error}"))
            .ok()
        })
        .as_ref()
}

/// Whether `target` is acceptable for a check of the given kind
pub fn classify_target(kind: CheckType, target: &str) -> bool {
    match kind {
        CheckType::Http => is_valid_url(target),
        CheckType::Tcp | CheckType::Ping => is_valid_ipv4(target) || is_valid_hostname(target),
    }
}

/// Absolute URL with an `http` or `https` scheme
pub fn is_valid_url(target: &str) -> bool {
    match Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Dotted quad where every octet is written in canonical decimal form
///
/// `192.168.1.1` passes; `192.168.01.1`, `999.1.1.1` and `1.2.3` do not.
pub fn is_valid_ipv4(target: &str) -> bool {
    let octets: Vec<&str> = target.split('.').collect();
    if octets.len() != 4 {
        return false;
    }

    octets.iter().all(|octet| {
        if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match octet.parse::<u8>() {
            Ok(value) => value.to_string() == *octet,
            Err(_) => false,
        }
    })
}

/// DNS hostname, at most 253 characters once a trailing dot is removed
///
/// Strings made only of digits and dots are never hostnames: they are
/// malformed IPv4 addresses and must not slip through as domains.
pub fn is_valid_hostname(target: &str) -> bool {
    let hostname = target.strip_suffix('.').unwrap_or(target);

    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LENGTH {
        return false;
    }

    if hostname.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return false;
    }

    hostname_regex().is_some_and(|regex| regex.is_match(hostname))
}

/// Candidate corrections for a target that does not fit its check type
pub fn suggest_target_fix(kind: CheckType, target: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    match kind {
        CheckType::Http => {
            if !target.starts_with("http://") && !target.starts_with("https://") {
                suggestions.push(format!("https://{target}"));
                suggestions.push(format!("http://{target}"));
            }
        }
        CheckType::Tcp | CheckType::Ping => {
            let cleaned = target
                .strip_prefix("https://")
                .or_else(|| target.strip_prefix("http://"))
                .unwrap_or(target);
            if cleaned != target {
                suggestions.push(cleaned.to_string());
            }
        }
    }

    suggestions
}
