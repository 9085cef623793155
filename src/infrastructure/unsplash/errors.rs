use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the Unsplash API
///
/// The provider boundary collapses all of these to an empty result list;
/// the taxonomy exists for internal diagnostics and tests.
#[derive(Error, Debug)]
pub enum UnsplashApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing Client-ID credential (HTTP 401)
    #[error("Invalid API key - authentication failed")]
    InvalidApiKey,

    /// Forbidden - permission denied or rate allowance exhausted (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Photo or endpoint not found (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded - too many requests")]
    RateLimitExceeded,

    /// Server error from the Unsplash API (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// Unknown or unexpected error
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl UnsplashApiError {
    /// Returns true if this error is transient (a retry could succeed).
    /// The provider never retries; callers embedding the client directly
    /// may want the distinction.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded | Self::ServerError(_, _) | Self::NetworkError(_)
        )
    }

    /// Returns true if this is a permanent error that retrying cannot fix.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::InvalidApiKey | Self::Forbidden(_) | Self::NotFound
        )
    }

    /// Classify a non-success HTTP status into an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => Self::InvalidApiKey,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            status if status.is_server_error() => Self::ServerError(status, body),
            status => Self::UnknownError(status, body),
        }
    }
}
