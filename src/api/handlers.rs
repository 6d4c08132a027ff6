use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::models::{validate_form, FieldErrors, GenerationResult, LocationSuggestion};
use crate::services::suggest_locations;
use crate::templates::prompt_generator_page;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub query: Option<String>,
}

pub async fn location_autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteQuery>,
) -> ApiResult<Json<Vec<LocationSuggestion>>> {
    let suggestions = suggest_locations(state.places.as_ref(), params.query.as_deref())
        .await
        .map_err(|source| ApiError::Autocomplete {
            source,
            debug: state.debug,
        })?;

    Ok(Json(suggestions))
}

pub async fn generate_prompt(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<GenerationResult>> {
    let Json(body) = body.map_err(|rejection| {
        let mut messages = FieldErrors::new();
        messages.insert("body".to_string(), vec![rejection.body_text()]);
        ApiError::Validation(messages)
    })?;

    let input = validate_form(&body).map_err(ApiError::Validation)?;

    let result = state
        .generator
        .generate(input)
        .await
        .map_err(|source| ApiError::Generation {
            source,
            debug: state.debug,
        })?;

    Ok(Json(result))
}

pub async fn prompt_generator() -> Html<String> {
    Html(prompt_generator_page().into_string())
}

pub async fn health_check() -> &'static str {
    "OK"
}
