use crate::models::{Platform, PropertyFormInput};

const FACEBOOK_STYLE: &str =
    "The description should be engaging and encourage sharing. Include emojis where appropriate.";
const INSTAGRAM_STYLE: &str = "The description should be concise but impactful, with hashtag suggestions at the end. Include emojis.";
const SEO_STYLE: &str =
    "The description should be detailed and professional, optimized for SEO with relevant keywords.";

const STRUCTURE: &str = "Structure the description with these sections: 1) Engaging introduction, 2) Detailed property features, 3) Nearby attractions and amenities, 4) Closing statement with a call to action.";
const TONE: &str = "Use a professional but inviting tone. Avoid generic phrases and highlight unique aspects of the property.";

/// Everything the prompt is built from
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub location: &'a str,
    pub rooms: u8,
    pub washrooms: u8,
    pub description: &'a str,
    pub nearby_places: &'a [String],
    pub platform: Platform,
}

impl<'a> PromptInput<'a> {
    pub fn from_form(form: &'a PropertyFormInput, nearby_places: &'a [String]) -> Self {
        Self {
            location: &form.location,
            rooms: form.rooms,
            washrooms: form.washrooms,
            description: &form.description,
            nearby_places,
            platform: form.platform,
        }
    }
}

/// Style guidance for a platform.
/// Only the social platforms get their own clause; every other platform,
/// Own Website included, falls back to the SEO clause.
pub fn style_clause(platform: Platform) -> &'static str {
    match platform {
        Platform::Facebook => FACEBOOK_STYLE,
        Platform::Instagram => INSTAGRAM_STYLE,
        _ => SEO_STYLE,
    }
}

/// Sentence listing nearby attractions, empty when there are none
pub fn nearby_clause(nearby_places: &[String]) -> String {
    if nearby_places.is_empty() {
        return String::new();
    }
    format!("Nearby attractions include: {}. ", nearby_places.join(", "))
}

/// Build the generation prompt. Pure: equal inputs give identical prompts.
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    format!(
        "Write a detailed 500-700 word property description for a real estate listing in {location}. \
         The property has {rooms} bedrooms and {washrooms} bathrooms. \
         Key features mentioned by the owner: {description}. \
         {nearby}{STRUCTURE} \
         The description should be optimized for {platform}. {style} \
         {TONE}",
        location = input.location,
        rooms = input.rooms,
        washrooms = input.washrooms,
        description = input.description,
        nearby = nearby_clause(input.nearby_places),
        platform = input.platform,
        style = style_clause(input.platform),
    )
}
