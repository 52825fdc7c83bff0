//! Consumption Peer Config

use std::time::Duration;

use clap::Args;

use happliance_app::consumptions::peer::ConsumptionPeerConfig;

/// Remote energy consumption peer settings.
#[derive(Debug, Args)]
pub struct PeerConfig {
    /// Base URL of the remote peer's appliance API
    #[arg(
        long,
        env = "CONSUMPTION_PEER_URL",
        default_value = "http://localhost:8080/api/v1/appliances"
    )]
    pub consumption_peer_url: String,

    /// Remote peer request timeout in milliseconds
    #[arg(long, env = "CONSUMPTION_PEER_TIMEOUT_MS", default_value_t = 3_000_u64)]
    pub consumption_peer_timeout_ms: u64,
}

impl PeerConfig {
    /// Request timeout for the remote peer.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.consumption_peer_timeout_ms)
    }

    /// Convert into the client configuration.
    #[must_use]
    pub fn into_peer_config(self) -> ConsumptionPeerConfig {
        ConsumptionPeerConfig {
            timeout: self.timeout(),
            base_url: self.consumption_peer_url,
        }
    }
}
