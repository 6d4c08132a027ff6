use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_GEOAPIFY_BASE_URL: &str = "https://api.geoapify.com";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Process configuration, loaded once at startup and handed to the providers
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Expose raw error text in error responses
    pub debug: bool,
    pub geoapify_api_key: String,
    pub geoapify_base_url: String,
    /// ISO country code autocomplete results are restricted to
    pub geoapify_country: String,
    /// Per-request timeout for autocomplete and places calls
    pub geoapify_timeout: Duration,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    /// Per-request timeout for generation calls
    pub gemini_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment (and `.env`, if present).
    ///
    /// Credentials may be absent here; the provider that needs one refuses
    /// to make a call without it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid BIND_ADDR: {addr}"))?,
            Err(_) => defaults.bind_addr,
        };

        let debug = env::var("APP_DEBUG")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let geoapify_timeout = timeout_var("GEOAPIFY_TIMEOUT_SECS", defaults.geoapify_timeout)?;
        let gemini_timeout = timeout_var("GEMINI_TIMEOUT_SECS", defaults.gemini_timeout)?;

        Ok(Self {
            bind_addr,
            debug,
            geoapify_api_key: env::var("GEOAPIFY_API_KEY").unwrap_or_default(),
            geoapify_base_url: env::var("GEOAPIFY_BASE_URL").unwrap_or(defaults.geoapify_base_url),
            geoapify_country: env::var("GEOAPIFY_COUNTRY").unwrap_or(defaults.geoapify_country),
            geoapify_timeout,
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_timeout,
        })
    }

    /// Names of the credentials that are missing or blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.geoapify_api_key.trim().is_empty() {
            missing.push("GEOAPIFY_API_KEY");
        }
        if self.gemini_api_key.trim().is_empty() {
            missing.push("GEMINI_API_KEY");
        }
        missing
    }
}

fn timeout_var(name: &str, default: Duration) -> Result<Duration> {
    match env::var(name) {
        Ok(secs) => secs
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("Invalid {name}: {secs}")),
        Err(_) => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            debug: false,
            geoapify_api_key: String::new(),
            geoapify_base_url: DEFAULT_GEOAPIFY_BASE_URL.to_string(),
            geoapify_country: "us".to_string(),
            geoapify_timeout: Duration::from_secs(10),
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_timeout: Duration::from_secs(30),
        }
    }
}
