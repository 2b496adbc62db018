use thiserror::Error;

/// Everything a request can fail with, folded into the categories the
/// UI actually distinguishes. None of these are fatal: every failure is
/// caught at the call site and converted into local view state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connectivity or transport failure. Shown as a generic transient
    /// notice; there is no automatic retry.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The stored credential was rejected. The session has already been
    /// cleared by the time this is returned; the caller redirects to
    /// the entry view.
    #[error("session expired or invalid")]
    Unauthorized,

    /// The resource does not exist. Rendered as an explicit empty
    /// state, not an error.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the input and said why. The message is
    /// display-ready; form state is preserved for correction.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short, display-ready text for a transient notice banner.
    pub fn user_notice(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::NotFound => "Nothing found.".to_string(),
            ApiError::Rejected(msg) => msg.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}
