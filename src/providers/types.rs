use crate::models::LocationSuggestion;
use serde::{Deserialize, Serialize};

/// Query parameters for Geoapify autocomplete
#[derive(Debug, Clone)]
pub struct AutocompleteParams {
    /// Maximum number of suggestions
    pub limit: u32,
    /// ISO country code results are restricted to
    pub country: String,
}

impl Default for AutocompleteParams {
    fn default() -> Self {
        Self {
            limit: 5,
            country: "us".to_string(),
        }
    }
}

impl AutocompleteParams {
    pub fn filter(&self) -> String {
        format!("countrycode:{}", self.country)
    }
}

/// Query parameters for the Geoapify places search
#[derive(Debug, Clone)]
pub struct PlacesParams {
    pub categories: String,
    /// Radius of the search circle in meters
    pub radius_meters: u32,
    /// Maximum number of places
    pub limit: u32,
}

impl Default for PlacesParams {
    fn default() -> Self {
        Self {
            categories: "commercial,leisure".to_string(),
            radius_meters: 5000,
            limit: 10,
        }
    }
}

impl PlacesParams {
    /// Circle filter centered on a point. Geoapify expects longitude first.
    pub fn circle_filter(&self, latitude: f64, longitude: f64) -> String {
        format!("circle:{},{},{}", longitude, latitude, self.radius_meters)
    }
}

// Geoapify GeoJSON responses

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
}

impl FeatureCollection {
    /// Features in provider order. A missing or null list is empty.
    pub fn into_features(self) -> Vec<Feature> {
        self.features.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureProperties {
    pub formatted: Option<String>,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Feature {
    /// Suggestion for this feature. Features without a formatted address or
    /// without coordinates are not selectable and yield `None`.
    pub fn into_suggestion(self) -> Option<LocationSuggestion> {
        let FeatureProperties {
            formatted, lat, lon, ..
        } = self.properties;
        let formatted = formatted.filter(|f| !f.trim().is_empty())?;
        Some(LocationSuggestion {
            formatted,
            lat: lat?,
            lon: lon?,
        })
    }
}

// Gemini generateContent payloads

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: Some(vec![Part {
                    text: Some(prompt.to_string()),
                }]),
                role: None,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}
