use crate::error::{ProviderError, ProviderResult};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Parse a provider response body as JSON.
/// Returns an upstream error carrying the raw body on a non-success status.
pub async fn read_json<R: DeserializeOwned>(
    provider: &'static str,
    response: Response,
) -> ProviderResult<R> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("{} returned status: {}", provider, status);
        return Err(ProviderError::Upstream {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse {
        provider,
        detail: format!("invalid JSON body: {e}"),
    })
}

/// Credential check done before every request
pub fn require_key<'a>(provider: &'static str, api_key: &'a str) -> ProviderResult<&'a str> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(ProviderError::Configuration(provider));
    }
    Ok(api_key)
}
