//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, observability::LoggingConfig, peer::PeerConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod peer;
pub(crate) mod server;

/// Home Appliance Registry JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "happliance-json", about = "Home Appliance Registry JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Remote energy consumption peer settings.
    #[command(flatten)]
    pub peer: PeerConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_the_database_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "happliance-json",
            "--database-url",
            "postgres://localhost/happliance",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(
            config.peer.consumption_peer_url,
            "http://localhost:8080/api/v1/appliances"
        );
        assert_eq!(config.peer.timeout(), Duration::from_secs(3));

        Ok(())
    }

    #[test]
    fn peer_settings_are_overridable() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "happliance-json",
            "--database-url",
            "postgres://localhost/happliance",
            "--consumption-peer-url",
            "http://peer.internal/api/v1/appliances",
            "--consumption-peer-timeout-ms",
            "250",
        ])?;

        let peer = config.peer.into_peer_config();

        assert_eq!(peer.base_url, "http://peer.internal/api/v1/appliances");
        assert_eq!(peer.timeout, Duration::from_millis(250));

        Ok(())
    }
}
