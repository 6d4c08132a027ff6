use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::providers::client_utils::{read_json, require_key};
use crate::providers::traits::TextGenerator;
use crate::providers::types::{GenerateContentRequest, GenerateContentResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const PROVIDER: &str = "Gemini";

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.gemini_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let api_key = require_key(PROVIDER, &self.api_key)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!("Sending {} byte prompt to {}", prompt.len(), self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let body: GenerateContentResponse = read_json(PROVIDER, response).await?;
        body.first_text()
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: PROVIDER,
                detail: "missing candidates[0].content.parts[0].text".to_string(),
            })
    }

    fn source_name(&self) -> &'static str {
        PROVIDER
    }
}
