use crate::error::ProviderResult;
use crate::models::LocationSuggestion;
use async_trait::async_trait;

/// Geocoding and points-of-interest lookups.
/// Implemented by the Geoapify client and by test doubles.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Address suggestions for a free-text query, in provider order
    async fn autocomplete(&self, query: &str) -> ProviderResult<Vec<LocationSuggestion>>;

    /// Raw names of commercial and leisure places around a point.
    /// May contain blanks and duplicates.
    async fn nearby_places(&self, latitude: f64, longitude: f64) -> ProviderResult<Vec<String>>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;
}

/// Generative-text backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    async fn generate(&self, prompt: &str) -> ProviderResult<String>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;
}
