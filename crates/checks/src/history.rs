//! Summaries computed from a check's result history.

use serde::{Deserialize, Serialize};

use crate::types::{CheckHistoryItem, CheckHistoryResponse, CheckStatus};

/// Relative latency change, in percent, above which a trend is reported
pub const TREND_THRESHOLD_PERCENT: f64 = 10.0;

/// Results per day when checking every 5 minutes
pub const SAMPLES_PER_DAY: u32 = 24 * 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStats {
    /// Share of `UP` results, in percent
    pub uptime: f64,
    pub total_checks: usize,
    pub up_checks: usize,
    pub down_checks: usize,
    pub degraded_checks: usize,
    /// Mean of the reported latencies, rounded to 2 decimals
    pub average_latency: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Degrading,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyTrend {
    pub trend: Trend,
    /// Percent change of the newer half over the older half, rounded to 2
    /// decimals
    pub change: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[u64]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Uptime and latency summary of a set of results
pub fn check_stats(history: &[CheckHistoryItem]) -> CheckStats {
    if history.is_empty() {
        return CheckStats::default();
    }

    let count = |status: CheckStatus| history.iter().filter(|h| h.status == status).count();
    let up_checks = count(CheckStatus::Up);

    let latencies: Vec<u64> = history.iter().filter_map(|h| h.latency_ms).collect();
    let average_latency = if latencies.is_empty() { 0.0 } else { round2(mean(&latencies)) };

    CheckStats {
        uptime: up_checks as f64 / history.len() as f64 * 100.0,
        total_checks: history.len(),
        up_checks,
        down_checks: count(CheckStatus::Down),
        degraded_checks: count(CheckStatus::Degraded),
        average_latency,
    }
}

/// Compare the older and the newer half of the reported latencies
///
/// `history` is newest first, as returned by the API. Fewer than two
/// latencies, or an older half averaging zero, is stable.
pub fn latency_trend(history: &[CheckHistoryItem]) -> LatencyTrend {
    let mut latencies: Vec<u64> = history.iter().filter_map(|h| h.latency_ms).collect();
    if latencies.len() < 2 {
        return LatencyTrend::default();
    }
    latencies.reverse();

    let (older, newer) = latencies.split_at(latencies.len() / 2);
    let older_avg = mean(older);
    if older_avg == 0.0 {
        return LatencyTrend::default();
    }

    let change = (mean(newer) - older_avg) / older_avg * 100.0;
    let trend = if change.abs() <= TREND_THRESHOLD_PERCENT {
        Trend::Stable
    } else if change > 0.0 {
        Trend::Degrading
    } else {
        Trend::Improving
    };

    LatencyTrend { trend, change: round2(change) }
}

/// Keep only the `DOWN` results of a page, `total` counts what is left
pub fn failed_only(mut page: CheckHistoryResponse) -> CheckHistoryResponse {
    page.data.retain(|h| h.status == CheckStatus::Down);
    page.pagination.total = page.data.len() as u64;
    page
}
