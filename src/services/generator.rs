use crate::error::ProviderResult;
use crate::models::{GenerationResult, PropertyFormInput};
use crate::providers::{PlacesProvider, TextGenerator};
use crate::services::nearby::lookup_nearby_places;
use crate::services::prompt::{build_prompt, PromptInput};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns a validated property form into a generated listing description
#[derive(Clone)]
pub struct DescriptionGenerator {
    places: Arc<dyn PlacesProvider>,
    text: Arc<dyn TextGenerator>,
}

impl DescriptionGenerator {
    pub fn new(places: Arc<dyn PlacesProvider>, text: Arc<dyn TextGenerator>) -> Self {
        Self { places, text }
    }

    /// Look up nearby attractions, build the prompt, then generate.
    /// The lookup always completes before generation starts since its result
    /// is part of the prompt.
    pub async fn generate(&self, input: PropertyFormInput) -> ProviderResult<GenerationResult> {
        info!("Generating description with data: {:?}", input);

        let nearby_places =
            lookup_nearby_places(self.places.as_ref(), input.latitude, input.longitude).await;
        info!("Nearby places found: {:?}", nearby_places);

        let prompt = build_prompt(&PromptInput::from_form(&input, &nearby_places));
        debug!("Generated prompt: {}", prompt);

        let description = self.text.generate(&prompt).await?;
        info!(
            "Successfully generated description via {} ({} chars)",
            self.text.source_name(),
            description.chars().count()
        );

        Ok(GenerationResult {
            description,
            input_data: input,
            nearby_places,
            prompt,
            generated_at: Utc::now(),
        })
    }
}
