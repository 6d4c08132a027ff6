use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod validation;

pub use validation::{validate_form, FieldErrors};

/// Platform the listing description is written for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    #[serde(rename = "Own Website", alias = "OwnWebsite")]
    OwnWebsite,
}

impl Platform {
    /// Exact-match lookup of a submitted platform value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Facebook" => Some(Self::Facebook),
            "Instagram" => Some(Self::Instagram),
            "Own Website" | "OwnWebsite" => Some(Self::OwnWebsite),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::OwnWebsite => "Own Website",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated property form, the input of one generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyFormInput {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rooms: u8,
    pub washrooms: u8,
    pub description: String,
    pub platform: Platform,
}

/// A single location autocomplete suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSuggestion {
    pub formatted: String,
    pub lat: f64,
    pub lon: f64,
}

/// Generated listing plus the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub description: String,
    pub input_data: PropertyFormInput,
    pub nearby_places: Vec<String>,
    pub prompt: String,
    pub generated_at: DateTime<Utc>,
}
