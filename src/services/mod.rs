pub mod autocomplete;
pub mod generator;
pub mod nearby;
pub mod prompt;

pub use autocomplete::suggest_locations;
pub use generator::DescriptionGenerator;
pub use nearby::lookup_nearby_places;
pub use prompt::{build_prompt, PromptInput};
