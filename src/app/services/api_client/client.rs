//! HTTP retrieval with retry and linear backoff
//!
//! Thin asynchronous wrapper over the EXFOR Web API endpoints. Transient
//! failures (transport errors, non-200 statuses from the CDN) are retried
//! with a linear backoff before surfacing a typed HTTP error.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::params::{entry_params, BulkOp, DatasetOp, SearchOutput, SearchQuery};
use crate::config::Config;
use crate::constants::{BULK_ENDPOINT, DATASET_ENDPOINT, RETRY_BACKOFF_BASE_SECS, SEARCH_ENDPOINT};
use crate::{Error, Result};

/// Asynchronous client for the EXFOR Web API
#[derive(Debug, Clone)]
pub struct ExforClient {
    http: Client,
    config: Config,
}

impl ExforClient {
    /// Create a client from configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::http("Failed to create HTTP client", Some(e)))?;

        Ok(Self { http, config })
    }

    /// Search for datasets matching criteria (x4list)
    pub async fn search_datasets(
        &self,
        query: &SearchQuery,
        output: SearchOutput,
    ) -> Result<String> {
        let mut params = query.to_params();
        params.push(output.as_param());
        self.get_text(SEARCH_ENDPOINT, &params).await
    }

    /// Retrieve one dataset (x4get)
    pub async fn fetch_dataset(&self, dataset_id: &str, op: DatasetOp) -> Result<String> {
        self.get_text(DATASET_ENDPOINT, &op.to_params(dataset_id))
            .await
    }

    /// One-step retrieval across many datasets (x4dat)
    pub async fn bulk_fetch(&self, query: &SearchQuery, op: BulkOp) -> Result<String> {
        let mut params = query.to_params();
        params.push(("op".to_string(), op.op_code().to_string()));
        self.get_text(BULK_ENDPOINT, &params).await
    }

    /// Retrieve an Entry or Subentry (x4get?sub=...)
    pub async fn fetch_entry(&self, sub: &str, plus: Option<u8>) -> Result<String> {
        self.get_text(DATASET_ENDPOINT, &entry_params(sub, plus))
            .await
    }

    /// GET an endpoint as text, retrying transient failures.
    ///
    /// Attempt n sleeps BASE + n seconds before the next try; retries are
    /// exhausted after `max_retries` attempts.
    async fn get_text(&self, endpoint: &str, params: &[(String, String)]) -> Result<String> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);

        for attempt in 0..self.config.max_retries {
            match self.http.get(&url).query(params).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!("GET {} succeeded on attempt {}", url, attempt + 1);
                    return response
                        .text()
                        .await
                        .map_err(|e| Error::http("Failed to read response body", Some(e)));
                }
                Ok(response) => {
                    warn!(
                        "GET {} returned status {} (attempt {}/{})",
                        url,
                        response.status(),
                        attempt + 1,
                        self.config.max_retries
                    );
                }
                Err(e) => {
                    warn!(
                        "GET {} failed: {} (attempt {}/{})",
                        url,
                        e,
                        attempt + 1,
                        self.config.max_retries
                    );
                }
            }

            // No sleep after the final attempt
            if attempt + 1 < self.config.max_retries {
                tokio::time::sleep(Duration::from_secs(
                    RETRY_BACKOFF_BASE_SECS + attempt as u64,
                ))
                .await;
            }
        }

        Err(Error::http(
            format!("GET {} failed after {} attempts", url, self.config.max_retries),
            None,
        ))
    }
}
