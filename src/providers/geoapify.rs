use crate::config::Config;
use crate::error::ProviderResult;
use crate::models::LocationSuggestion;
use crate::providers::client_utils::{read_json, require_key};
use crate::providers::traits::PlacesProvider;
use crate::providers::types::{AutocompleteParams, Feature, FeatureCollection, PlacesParams};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const PROVIDER: &str = "Geoapify";

/// Geoapify geocoding and places client
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    base_url: String,
    autocomplete: AutocompleteParams,
    places: PlacesParams,
}

impl GeoapifyClient {
    /// Create a client from process configuration with default query parameters
    pub fn new(config: &Config) -> Result<Self> {
        let autocomplete = AutocompleteParams {
            country: config.geoapify_country.clone(),
            ..AutocompleteParams::default()
        };
        Self::with_params(config, autocomplete, PlacesParams::default())
    }

    fn with_params(
        config: &Config,
        autocomplete: AutocompleteParams,
        places: PlacesParams,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.geoapify_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.geoapify_api_key.clone(),
            base_url: config.geoapify_base_url.trim_end_matches('/').to_string(),
            autocomplete,
            places,
        })
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyClient {
    async fn autocomplete(&self, query: &str) -> ProviderResult<Vec<LocationSuggestion>> {
        let api_key = require_key(PROVIDER, &self.api_key)?;
        let url = format!("{}/v1/geocode/autocomplete", self.base_url);
        let limit = self.autocomplete.limit.to_string();
        let filter = self.autocomplete.filter();

        debug!("Fetching autocomplete suggestions for {:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("text", query),
                ("limit", limit.as_str()),
                ("filter", filter.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let collection: FeatureCollection = read_json(PROVIDER, response).await?;
        let suggestions: Vec<LocationSuggestion> = collection
            .into_features()
            .into_iter()
            .filter_map(Feature::into_suggestion)
            .collect();

        debug!("Geoapify returned {} suggestions", suggestions.len());
        Ok(suggestions)
    }

    async fn nearby_places(&self, latitude: f64, longitude: f64) -> ProviderResult<Vec<String>> {
        let api_key = require_key(PROVIDER, &self.api_key)?;
        let url = format!("{}/v2/places", self.base_url);
        let filter = self.places.circle_filter(latitude, longitude);
        let limit = self.places.limit.to_string();

        debug!("Fetching places within {}", filter);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("categories", self.places.categories.as_str()),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let collection: FeatureCollection = read_json(PROVIDER, response).await?;
        Ok(collection
            .into_features()
            .into_iter()
            .filter_map(|feature| feature.properties.name)
            .collect())
    }

    fn source_name(&self) -> &'static str {
        PROVIDER
    }
}
