pub mod client_utils;
pub mod gemini;
pub mod geoapify;
pub mod traits;
pub mod types;

pub use gemini::GeminiClient;
pub use geoapify::GeoapifyClient;
pub use traits::{PlacesProvider, TextGenerator};
