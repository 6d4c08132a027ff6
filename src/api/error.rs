use crate::error::ProviderError;
use crate::models::FieldErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Autocomplete failure. `debug` exposes the underlying message.
    #[error("Autocomplete error: {source}")]
    Autocomplete { source: ProviderError, debug: bool },

    /// Generation failure. `debug` exposes the error chain.
    #[error("Generate description error: {source}")]
    Generation { source: ProviderError, debug: bool },
}

/// Messages of an error and all of its sources, outermost first
pub fn error_chain(error: &(dyn StdError + 'static)) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        chain.push(err.to_string());
        current = err.source();
    }
    chain
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(messages) => {
                tracing::warn!("Validation failed: {:?}", messages);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": "Validation failed",
                        "messages": messages,
                    }),
                )
            }
            ApiError::Autocomplete { source, debug } => {
                tracing::error!(status = ?source.status(), "Autocomplete error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Service unavailable",
                        "details": debug.then(|| source.to_string()),
                    }),
                )
            }
            ApiError::Generation { source, debug } => {
                tracing::error!(status = ?source.status(), "Generate description error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate description",
                        "message": source.to_string(),
                        "trace": debug.then(|| error_chain(source)),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
