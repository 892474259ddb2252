//! HTTP adapter for the oracle gateway port

use crate::config::OracleConfig;
use crate::oracle::protocol::OracleResponse;
use async_trait::async_trait;
use oraculo_application::ports::oracle_gateway::{OracleError, OracleGateway};
use oraculo_domain::Outcome;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("oraculo/", env!("CARGO_PKG_VERSION"));

/// Oracle gateway backed by the public yesno.wtf HTTP API.
pub struct YesNoGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl YesNoGateway {
    /// Build a gateway from configuration. The underlying client applies
    /// the configured request timeout to every call.
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OracleGateway for YesNoGateway {
    async fn fetch_outcome(&self) -> Result<Outcome, OracleError> {
        debug!(endpoint = %self.endpoint, "fetching oracle outcome");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "oracle returned an error status");
            return Err(OracleError::Transport(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let decoded: OracleResponse = serde_json::from_slice(&body)
            .map_err(|e| OracleError::MalformedPayload(e.to_string()))?;

        debug!(answer = ?decoded.answer, "oracle answered");
        Ok(decoded.into())
    }
}
