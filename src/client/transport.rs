use std::time::Duration;

use ureq::Agent;

use crate::error::PostpassError;

/// One blocking urlencoded-form POST, returning the raw response body.
///
/// Anything that goes wrong on the wire (connect failure, timeout,
/// unsuccessful status) comes back as `PostpassError::Transport`.
pub trait HttpTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<Vec<u8>, PostpassError>;
}

/// Default transport backed by a `ureq` agent with a global timeout.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        UreqTransport {
            agent: config.into(),
        }
    }
}

impl HttpTransport for UreqTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<Vec<u8>, PostpassError> {
        let mut response = self
            .agent
            .post(url)
            .send_form(fields.iter().copied())
            .map_err(|e| PostpassError::Transport(e.to_string()))?;
        response
            .body_mut()
            .read_to_vec()
            .map_err(|e| PostpassError::Transport(e.to_string()))
    }
}
