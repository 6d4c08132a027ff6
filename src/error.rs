use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider credential is missing or blank. Raised before any request
    /// is sent.
    #[error("{0} API key not configured")]
    Configuration(&'static str),
    /// The provider answered with a non-success status code
    #[error("{provider} API error (status {status}): {body}")]
    Upstream {
        provider: &'static str,
        status: u16,
        body: String,
    },
    /// The request could not be sent or timed out, or the body could not be
    /// read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered successfully but the payload is missing the data
    /// we need.
    #[error("Unexpected {provider} response: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
}

impl ProviderError {
    /// Provider status code, when the failure came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
