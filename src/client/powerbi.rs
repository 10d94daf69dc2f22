use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::query::QueryTemplate;
use crate::crawler::{FetchError, FetchOutcome, PageFetcher};
use crate::decoder::RestartToken;
use crate::shared::config::model::PowerBiConfig;

/// Statuses the service answers transiently, either under load or when its
/// anti-bot layer interferes; an identical re-send usually clears them.
const TRANSIENT_STATUSES: [u16; 10] = [400, 429, 403, 408, 500, 502, 503, 504, 522, 523];

pub(crate) fn is_transient(status: StatusCode) -> bool {
    TRANSIENT_STATUSES.contains(&status.as_u16())
}

/// Sorts a parsed response body into the controller's two fetch outcomes.
///
/// A body without a non-empty `results` array is the service's challenge
/// shell, not an error; the same page may succeed on a re-request.
pub(crate) fn classify_body(body: Value) -> FetchOutcome {
    match body.get("results").and_then(Value::as_array) {
        Some(results) if !results.is_empty() => FetchOutcome::Body(body),
        _ => FetchOutcome::Empty,
    }
}

/// `PageFetcher` over the public PowerBI `querydata` endpoint.
///
/// Owns the HTTP transport: the fixed report URL and resource-key header,
/// request pacing, and the status-code retry loop. The controller above it
/// only ever sees a decodable body or the empty indicator.
pub struct PowerBiClient {
    http: reqwest::Client,
    report_url: String,
    resource_key: String,
    template: QueryTemplate,
    status_retry_limit: u32,
    download_delay: Duration,
    delay_jitter: Duration,
}

impl PowerBiClient {
    pub fn new(config: &PowerBiConfig, template: QueryTemplate) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            report_url: config.report_url.clone(),
            resource_key: config.resource_key.clone(),
            template,
            status_retry_limit: config.status_retry_limit,
            download_delay: Duration::from_millis(config.download_delay_ms),
            delay_jitter: Duration::from_millis(config.delay_jitter_ms),
        })
    }

    pub fn from_config(config: &PowerBiConfig) -> Result<Self, FetchError> {
        Self::new(config, QueryTemplate::from_config(config))
    }

    /// Pauses before a request so the crawl stays under the service's rate
    /// ceiling. The jitter keeps repeated crawls off a fixed cadence.
    async fn pace(&self) {
        let jitter = rand::thread_rng().gen_range(Duration::ZERO..=self.delay_jitter);
        tokio::time::sleep(self.download_delay + jitter).await;
    }
}

#[async_trait]
impl PageFetcher for PowerBiClient {
    async fn fetch(&mut self, token: Option<&RestartToken>) -> Result<FetchOutcome, FetchError> {
        let body = self.template.render(token);
        let mut attempts: u32 = 0;

        loop {
            self.pace().await;
            attempts += 1;

            let response = self
                .http
                .post(&self.report_url)
                .header("X-PowerBI-ResourceKey", &self.resource_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if is_transient(status) {
                if attempts > self.status_retry_limit {
                    return Err(FetchError::RetriesExhausted {
                        status: status.as_u16(),
                        attempts,
                    });
                }
                warn!(
                    target: "moj::client",
                    status = status.as_u16(),
                    attempt = attempts,
                    max = self.status_retry_limit,
                    "Transient status, re-sending the request"
                );
                continue;
            }
            if !status.is_success() {
                return Err(FetchError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }

            let parsed: Value = response
                .json()
                .await
                .map_err(|e| FetchError::NonJsonBody(e.to_string()))?;
            debug!(
                target: "moj::client",
                attempts,
                continuing = token.is_some(),
                "Fetched a page"
            );
            return Ok(classify_body(parsed));
        }
    }
}
