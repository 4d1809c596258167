use serde::{Deserialize, Serialize};

use super::check::CheckStatus;

/// One recorded result of a check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckHistoryItem {
    pub id: i64,
    pub check_id: i64,
    pub status: CheckStatus,

    /// Legacy flag, prefer `status`
    #[serde(default)]
    pub success: bool,

    pub status_code: Option<u16>,
    pub latency_ms: Option<u64>,
    pub message: Option<String>,

    /// ISO 8601 timestamp
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Page of history, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckHistoryResponse {
    pub data: Vec<CheckHistoryItem>,
    pub pagination: PaginationMeta,
}
