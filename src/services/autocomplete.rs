use crate::error::ProviderResult;
use crate::models::LocationSuggestion;
use crate::providers::PlacesProvider;
use tracing::debug;

/// Location suggestions for a partially typed address.
///
/// A missing or blank query returns no suggestions without calling the
/// provider.
pub async fn suggest_locations(
    places: &dyn PlacesProvider,
    query: Option<&str>,
) -> ProviderResult<Vec<LocationSuggestion>> {
    let query = query.map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    debug!("Autocomplete via {} for {:?}", places.source_name(), query);

    let suggestions = places.autocomplete(query).await?;
    Ok(suggestions
        .into_iter()
        .filter(|suggestion| !suggestion.formatted.trim().is_empty())
        .collect())
}
