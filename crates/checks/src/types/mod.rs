//! Data types shared by the validator, the templates and the API client.
//!
//! Wire names follow the checks API. Stored checks and history records are
//! camelCase. Configs mix `timeoutMs`, `expectedStatus` and `packetSize` with
//! snake_case for the rest.

pub mod check;
pub mod config;
pub mod history;
pub mod requests;

pub use check::{Check, CheckStatus, CheckType};
pub use config::{
    CheckConfig, ContentCheck, ContentCheckType, ExpectedStatus, HttpConfig, HttpMethod,
    PingConfig, TcpConfig,
};
pub use history::{CheckHistoryItem, CheckHistoryResponse, PaginationMeta};
pub use requests::{
    AlertRuleConfig, ChecksQuery, CreateAlertRuleRequest, CreateCheckRequest, HistoryQuery,
    UpdateCheckRequest,
};
