use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::prompt::ListingPrompt;
use super::traits::DescriptionGenerator;

/// HTTP-backed description provider
pub struct HttpGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGenerator {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl DescriptionGenerator for HttpGenerator {
    async fn generate(&self, prompt: &ListingPrompt) -> Result<String> {
        let body = json!({ "prompt": prompt.to_prompt_text() });
        debug!("Requesting description from {}", self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach the description provider")?;

        if !response.status().is_success() {
            anyhow::bail!("Description provider returned status: {}", response.status());
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse provider response")?;

        payload
            .get("text")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Provider response is missing the text field"))
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}
