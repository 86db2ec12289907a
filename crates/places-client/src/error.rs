use thiserror::Error;

/// Errors returned by the places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {context}")]
    UnexpectedStatus { status: u16, context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl PlacesError {
    /// Returns `true` when the server was reached but its answer was unusable.
    ///
    /// The collector treats such pages as empty instead of aborting the run;
    /// transport failures and configuration errors are not tolerated.
    #[must_use]
    pub fn is_bad_response(&self) -> bool {
        matches!(
            self,
            PlacesError::UnexpectedStatus { .. } | PlacesError::Deserialize { .. }
        )
    }
}
