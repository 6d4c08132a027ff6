use crate::providers::PlacesProvider;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Upper bound on attractions mentioned in a prompt
pub const MAX_NEARBY_PLACES: usize = 10;

/// Distinct nearby place names around a point, in first-seen order.
///
/// Attractions only enrich the prompt, so any provider failure degrades to an
/// empty list instead of failing the request.
pub async fn lookup_nearby_places(
    places: &dyn PlacesProvider,
    latitude: f64,
    longitude: f64,
) -> Vec<String> {
    match places.nearby_places(latitude, longitude).await {
        Ok(names) => {
            let names = distinct_names(names);
            debug!("{} distinct nearby places", names.len());
            names
        }
        Err(e) => {
            warn!(
                "Nearby places lookup via {} failed, continuing without attractions: {}",
                places.source_name(),
                e
            );
            Vec::new()
        }
    }
}

/// Drop blank names and later duplicates, keeping at most `MAX_NEARBY_PLACES`
pub fn distinct_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .take(MAX_NEARBY_PLACES)
        .collect()
}
