mod extract;
mod transport;

use std::time::Duration;

pub use transport::*;

/// Public Postpass interpreter run by Geofabrik, used when no endpoint is
/// configured.
pub const DEFAULT_POSTPASS_ENDPOINT: &str = "https://postpass.geofabrik.de/api/0.2/interpreter";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for a Postpass SQL interpreter endpoint.
///
/// Holds only immutable configuration; every call is an independent blocking
/// request with no retries and no shared state between calls.
pub struct PostpassClient {
    endpoint: String,
    timeout: Duration,
    transport: Box<dyn HttpTransport>,
}

impl Default for PostpassClient {
    fn default() -> Self {
        Self::new(DEFAULT_POSTPASS_ENDPOINT)
    }
}

impl PostpassClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Self {
        PostpassClient {
            endpoint: endpoint.to_string(),
            timeout,
            transport: Box::new(UreqTransport::new(timeout)),
        }
    }

    /// Swaps the HTTP transport, for callers that bring their own stack and
    /// for tests.
    pub fn with_transport(endpoint: &str, transport: Box<dyn HttpTransport>) -> Self {
        PostpassClient {
            endpoint: endpoint.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
