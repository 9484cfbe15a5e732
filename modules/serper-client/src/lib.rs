pub mod error;
pub mod types;

pub use error::{Result, SerperError};
pub use types::{OrganicResult, SearchRequest, SearchResponse};

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

pub struct SerperClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SerperClient {
    /// A blank key is treated the same as a missing one.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run one Google search and return its organic results.
    ///
    /// Fails with [`SerperError::MissingApiKey`] before touching the network when
    /// no key is configured. A response without an `organic` block yields an
    /// empty list.
    pub async fn search(&self, query: &str, num: usize) -> Result<Vec<OrganicResult>> {
        let api_key = self.api_key.as_deref().ok_or(SerperError::MissingApiKey)?;

        let endpoint = format!("{}/search", self.base_url);
        let body = SearchRequest {
            q: query.to_string(),
            num,
        };

        tracing::debug!(query, num, "Serper search");

        let resp = self
            .client
            .post(&endpoint)
            .header("X-API-KEY", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let data: SearchResponse = serde_json::from_str(&text)?;

        tracing::info!(count = data.organic.len(), "Serper search complete");
        Ok(data.organic)
    }
}
