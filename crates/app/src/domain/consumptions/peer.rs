//! Remote energy consumption peer.
//!
//! Another deployment of this service that may know a profile this one has
//! not stored yet. Every failure here is soft: the resolver logs it and moves
//! on.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::consumptions::records::EnergyConsumption;

/// Default request timeout for the remote peer.
pub const DEFAULT_PEER_TIMEOUT: Duration = Duration::from_secs(3);

/// Looks up energy consumption profiles held by a remote peer.
#[automock]
#[async_trait]
pub trait ConsumptionPeer: Send + Sync {
    /// Fetch the profile stored under `name` on the peer.
    async fn fetch_consumption(&self, name: &str) -> Result<EnergyConsumption, ConsumptionPeerError>;
}

/// Configuration for the remote peer.
#[derive(Debug, Clone)]
pub struct ConsumptionPeerConfig {
    /// Base URL of the peer's appliance API, e.g.
    /// `"http://localhost:8080/api/v1/appliances"`.
    pub base_url: String,

    pub timeout: Duration,
}

/// HTTP client for the remote peer.
#[derive(Debug, Clone)]
pub struct HttpConsumptionPeer {
    config: ConsumptionPeerConfig,
    http: Client,
}

impl HttpConsumptionPeer {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ConsumptionPeerConfig) -> Result<Self, ConsumptionPeerError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    fn lookup_url(&self) -> String {
        format!("{}/name", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ConsumptionPeer for HttpConsumptionPeer {
    async fn fetch_consumption(&self, name: &str) -> Result<EnergyConsumption, ConsumptionPeerError> {
        let response = self
            .http
            .get(self.lookup_url())
            .query(&[("name", name)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ConsumptionPeerError::UnexpectedResponse(format!(
                "lookup failed with status {status}: {text}"
            )));
        }

        let parsed: ConsumptionResponse = response.json().await?;

        parsed.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConsumptionResponse {
    name: Option<String>,
    power: Option<i32>,
    monthly_usage: Option<i32>,
    daily_use: Option<i32>,
    monthly_consumption_average: Option<Decimal>,
}

impl TryFrom<ConsumptionResponse> for EnergyConsumption {
    type Error = ConsumptionPeerError;

    fn try_from(response: ConsumptionResponse) -> Result<Self, Self::Error> {
        let (Some(name), Some(power)) = (response.name, response.power) else {
            return Err(ConsumptionPeerError::IncompleteProfile);
        };

        Ok(Self {
            name,
            power,
            monthly_usage: response.monthly_usage,
            daily_use: response.daily_use,
            monthly_consumption_average: response.monthly_consumption_average,
        })
    }
}

/// Errors that can occur when talking to the remote peer.
#[derive(Debug, Error)]
pub enum ConsumptionPeerError {
    /// An HTTP transport, timeout or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The peer answered with a non-2xx status.
    #[error("unexpected response from consumption peer: {0}")]
    UnexpectedResponse(String),

    /// The peer's body lacked a name or a power value.
    #[error("consumption peer returned an incomplete profile")]
    IncompleteProfile,
}
