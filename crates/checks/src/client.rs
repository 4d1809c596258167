//! Client for the remote checks API.
//!
//! Create and update payloads are validated locally first: an invalid payload
//! fails with [`ChecksApiError::Validation`] and no request is sent.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    error::{ApiErrorBody, ChecksApiError},
    history::{self, CheckStats, LatencyTrend, SAMPLES_PER_DAY},
    templates::CheckExamples,
    types::{
        Check, CheckHistoryItem, CheckHistoryResponse, CheckType, ChecksQuery,
        CreateAlertRuleRequest, CreateCheckRequest, HistoryQuery, UpdateCheckRequest,
    },
    validation::{validate_create_check_request, validate_update_check_request},
};

const CHECKS_PATH: &str = "api/v1/checks";
const EXAMPLES_PATH: &str = "api/v1/public/checks/examples";

#[derive(Debug, Clone)]
pub struct ChecksClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ChecksClient {
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, ChecksApiError> {
        // Keep any path prefix of the base URL when joining endpoints
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url, token: None })
    }

    /// Bearer token sent with every private endpoint
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ChecksApiError> {
        self.base_url.join(path).map_err(|error| ChecksApiError::Api {
            message: format!("Invalid endpoint '{path}': {error}"),
            status: 0,
            details: None,
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ChecksApiError> {
        let response = error_for_status(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// `GET /api/v1/checks`
    pub async fn list_checks(&self, query: &ChecksQuery) -> Result<Vec<Check>, ChecksApiError> {
        let url = self.endpoint(CHECKS_PATH)?;
        debug!("Listing checks with {:?}", query);
        self.send(self.request(Method::GET, url).query(query)).await
    }

    pub async fn active_checks(&self) -> Result<Vec<Check>, ChecksApiError> {
        self.list_checks(&ChecksQuery { enabled: Some(true), ..Default::default() }).await
    }

    pub async fn checks_by_type(&self, kind: CheckType) -> Result<Vec<Check>, ChecksApiError> {
        self.list_checks(&ChecksQuery { check_type: Some(kind), ..Default::default() }).await
    }

    /// `GET /api/v1/checks/{id}`
    pub async fn get_check(&self, id: i64) -> Result<Check, ChecksApiError> {
        let url = self.endpoint(&format!("{CHECKS_PATH}/{id}"))?;
        self.send(self.request(Method::GET, url)).await
    }

    /// `POST /api/v1/checks`
    pub async fn create_check(
        &self,
        request: &CreateCheckRequest,
    ) -> Result<Check, ChecksApiError> {
        if let Some(error) = ChecksApiError::validation(validate_create_check_request(request)) {
            warn!("Refusing to send invalid check '{}': {}", request.name, error);
            return Err(error);
        }

        let url = self.endpoint(CHECKS_PATH)?;
        let check: Check = self.send(self.request(Method::POST, url).json(request)).await?;
        info!("Created {} check '{}' with id {}", check.check_type, check.name, check.id);
        Ok(check)
    }

    /// `PUT /api/v1/checks/{id}`
    pub async fn update_check(
        &self,
        id: i64,
        request: &UpdateCheckRequest,
    ) -> Result<Check, ChecksApiError> {
        if let Some(error) = ChecksApiError::validation(validate_update_check_request(request)) {
            warn!("Refusing to send invalid update for check {}: {}", id, error);
            return Err(error);
        }

        let url = self.endpoint(&format!("{CHECKS_PATH}/{id}"))?;
        self.send(self.request(Method::PUT, url).json(request)).await
    }

    /// `DELETE /api/v1/checks/{id}`, removes the check and its history
    pub async fn delete_check(&self, id: i64) -> Result<(), ChecksApiError> {
        let url = self.endpoint(&format!("{CHECKS_PATH}/{id}"))?;
        error_for_status(self.request(Method::DELETE, url).send().await?).await?;
        info!("Deleted check {}", id);
        Ok(())
    }

    pub async fn toggle_check(&self, id: i64, enabled: bool) -> Result<Check, ChecksApiError> {
        self.update_check(id, &UpdateCheckRequest::enabled(enabled)).await
    }

    /// Copy an existing check under a new name
    pub async fn duplicate_check(
        &self,
        source_id: i64,
        new_name: &str,
    ) -> Result<Check, ChecksApiError> {
        let source = self.get_check(source_id).await?;

        let request = CreateCheckRequest {
            name: new_name.to_string(),
            check_type: source.check_type,
            target: source.target,
            interval: Some(source.interval.into()),
            config: Some(source.config),
        };

        self.create_check(&request).await
    }

    /// `GET /api/v1/checks/{id}/history`, newest first
    pub async fn check_history(
        &self,
        id: i64,
        query: &HistoryQuery,
    ) -> Result<CheckHistoryResponse, ChecksApiError> {
        let url = self.endpoint(&format!("{CHECKS_PATH}/{id}/history"))?;
        debug!("Fetching history of check {} with {:?}", id, query);
        self.send(self.request(Method::GET, url).query(query)).await
    }

    pub async fn recent_history(
        &self,
        id: i64,
        limit: u32,
    ) -> Result<CheckHistoryResponse, ChecksApiError> {
        self.check_history(id, &HistoryQuery { limit: Some(limit), offset: Some(0) }).await
    }

    /// One based page of history
    pub async fn paginated_history(
        &self,
        id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<CheckHistoryResponse, ChecksApiError> {
        self.check_history(id, &HistoryQuery::page(page, page_size)).await
    }

    /// Only the `DOWN` results among the fetched ones
    pub async fn failed_history(
        &self,
        id: i64,
        limit: Option<u32>,
    ) -> Result<CheckHistoryResponse, ChecksApiError> {
        let page = self.check_history(id, &HistoryQuery { limit, offset: None }).await?;
        Ok(history::failed_only(page))
    }

    /// Uptime and latency over roughly the last `days` days
    pub async fn check_stats(&self, id: i64, days: u32) -> Result<CheckStats, ChecksApiError> {
        let limit = days.saturating_mul(SAMPLES_PER_DAY);
        let page = self.check_history(id, &HistoryQuery::limit(limit)).await?;
        Ok(history::check_stats(&page.data))
    }

    /// Newest result, `None` when the check never ran
    pub async fn last_check_status(
        &self,
        id: i64,
    ) -> Result<Option<CheckHistoryItem>, ChecksApiError> {
        let page = self.recent_history(id, 1).await?;
        Ok(page.data.into_iter().next())
    }

    /// Latency trend over the last `samples` results
    pub async fn latency_trend(
        &self,
        id: i64,
        samples: u32,
    ) -> Result<LatencyTrend, ChecksApiError> {
        let page = self.check_history(id, &HistoryQuery::limit(samples)).await?;
        Ok(history::latency_trend(&page.data))
    }

    /// `POST /api/v1/checks/{id}/alert-rules`
    pub async fn create_alert_rule(
        &self,
        check_id: i64,
        request: &CreateAlertRuleRequest,
    ) -> Result<Value, ChecksApiError> {
        let url = self.endpoint(&format!("{CHECKS_PATH}/{check_id}/alert-rules"))?;
        let rule = self.send(self.request(Method::POST, url).json(request)).await?;
        info!("Created alert rule on check {} for channel {}", check_id, request.channel_id);
        Ok(rule)
    }

    /// `GET /api/v1/checks/{id}/alert-rules`
    pub async fn alert_rules(&self, check_id: i64) -> Result<Vec<Value>, ChecksApiError> {
        let url = self.endpoint(&format!("{CHECKS_PATH}/{check_id}/alert-rules"))?;
        self.send(self.request(Method::GET, url)).await
    }

    /// `GET /api/v1/public/checks/examples`, no authentication required
    pub async fn check_examples(&self) -> Result<CheckExamples, ChecksApiError> {
        let url = self.endpoint(EXAMPLES_PATH)?;
        self.send(self.http.get(url)).await
    }
}

async fn error_for_status(response: Response) -> Result<Response, ChecksApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
    warn!("Checks API answered {}: {}", status, body.message);

    Err(ChecksApiError::from_response(status.as_u16(), body))
}
