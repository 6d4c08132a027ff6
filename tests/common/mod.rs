#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use listing_writer::error::{ProviderError, ProviderResult};
use listing_writer::models::LocationSuggestion;
use listing_writer::providers::{PlacesProvider, TextGenerator};
use listing_writer::{routes, AppState};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory places provider that records every call.
/// `None` answers fail with a provider error.
#[derive(Default)]
pub struct FakePlaces {
    pub suggestions: Option<Vec<LocationSuggestion>>,
    pub nearby: Option<Vec<String>>,
    pub autocomplete_calls: Mutex<Vec<String>>,
    pub nearby_calls: Mutex<Vec<(f64, f64)>>,
}

impl FakePlaces {
    pub fn with_nearby(names: &[&str]) -> Self {
        Self {
            nearby: Some(names.iter().map(|n| n.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn autocomplete_count(&self) -> usize {
        self.autocomplete_calls.lock().unwrap().len()
    }

    pub fn nearby_count(&self) -> usize {
        self.nearby_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PlacesProvider for FakePlaces {
    async fn autocomplete(&self, query: &str) -> ProviderResult<Vec<LocationSuggestion>> {
        self.autocomplete_calls
            .lock()
            .unwrap()
            .push(query.to_string());
        self.suggestions.clone().ok_or(ProviderError::Upstream {
            provider: "Geoapify",
            status: 503,
            body: "geocoder down".to_string(),
        })
    }

    async fn nearby_places(&self, latitude: f64, longitude: f64) -> ProviderResult<Vec<String>> {
        self.nearby_calls
            .lock()
            .unwrap()
            .push((latitude, longitude));
        self.nearby.clone().ok_or(ProviderError::Upstream {
            provider: "Geoapify",
            status: 500,
            body: "places down".to_string(),
        })
    }

    fn source_name(&self) -> &'static str {
        "FakePlaces"
    }
}

/// In-memory text generator that records every prompt
#[derive(Default)]
pub struct FakeText {
    pub reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeText {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(ProviderError::Upstream {
            provider: "Gemini",
            status: 500,
            body: r#"{"error":{"message":"quota exceeded"}}"#.to_string(),
        })
    }

    fn source_name(&self) -> &'static str {
        "FakeText"
    }
}

pub fn test_app(debug: bool, places: Arc<FakePlaces>, text: Arc<FakeText>) -> Router {
    routes(AppState::new(debug, places, text))
}

/// Send a request and decode the JSON response body
pub async fn send_json(app: Router, request: Request<Body>) -> (axum::http::StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
