pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use crate::config::Config;
use crate::providers::{GeminiClient, GeoapifyClient, PlacesProvider, TextGenerator};
use crate::services::DescriptionGenerator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared per-process state. Holds no request data.
#[derive(Clone)]
pub struct AppState {
    pub debug: bool,
    pub places: Arc<dyn PlacesProvider>,
    pub generator: DescriptionGenerator,
}

impl AppState {
    pub fn new(
        debug: bool,
        places: Arc<dyn PlacesProvider>,
        text: Arc<dyn TextGenerator>,
    ) -> Self {
        let generator = DescriptionGenerator::new(places.clone(), text);
        Self {
            debug,
            places,
            generator,
        }
    }

    /// State backed by the real Geoapify and Gemini clients
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let places: Arc<dyn PlacesProvider> = Arc::new(GeoapifyClient::new(config)?);
        let text: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(config)?);
        Ok(Self::new(config.debug, places, text))
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/prompt-generator", get(handlers::prompt_generator))
        .route("/location-autocomplete", get(handlers::location_autocomplete))
        .route("/generate-prompt", post(handlers::generate_prompt))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
