//! Road routing error types.

/// Errors from the road router.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Router returned an error status without a readable body
    #[error("router error {status}: {message}")]
    Api { status: u16, message: String },

    /// Router answered but reported a non-`Ok` code
    #[error("router rejected request: {code}{}", detail(.message))]
    Rejected {
        code: String,
        message: Option<String>,
    },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// `Ok` response with an empty route list
    #[error("router returned no routes")]
    NoRoute,

    /// The client can no longer issue requests
    #[error("router unavailable: {0}")]
    Unavailable(String),
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}
