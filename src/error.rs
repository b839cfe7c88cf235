use thiserror::Error;

/// Failure modes of the query builder and the extraction client.
#[derive(Debug, Error)]
pub enum PostpassError {
    /// A required request field was missing or malformed. Detected before
    /// any network activity.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The client is missing required configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP request itself failed: network error, timeout, or an
    /// unsuccessful status from the endpoint.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded as the expected GeoJSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
