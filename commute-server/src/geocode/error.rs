//! Place resolution error types.

/// Errors raised when free text cannot be turned into a coordinate.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Geocoder returned an error status
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a candidate list
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The lookup succeeded but matched nothing
    #[error("no geocoding candidates for {query:?}")]
    NoCandidates { query: String },

    /// A candidate carried a latitude or longitude that is not a number
    #[error("invalid coordinate value {value:?}")]
    InvalidCoordinate { value: String },

    /// The client can no longer issue requests
    #[error("geocoder unavailable: {0}")]
    Unavailable(String),
}
