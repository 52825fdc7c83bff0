//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    appliances::{ApplianceRegistry, AppliancesService, repository::PgAppliancesRepository},
    consumptions::{
        ConsumptionResolver, ConsumptionsService,
        peer::{ConsumptionPeerConfig, ConsumptionPeerError, HttpConsumptionPeer},
        repository::PgConsumptionsRepository,
    },
    database,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to build the consumption peer client")]
    Peer(#[source] ConsumptionPeerError),
}

#[derive(Clone)]
pub struct AppContext {
    pub appliances: Arc<dyn AppliancesService>,
    pub consumptions: Arc<dyn ConsumptionsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or building
    /// the peer client fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        peer: ConsumptionPeerConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Self::from_pool(pool, peer)
    }

    /// Wire the services over an existing pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the peer client cannot be built.
    pub fn from_pool(pool: PgPool, peer: ConsumptionPeerConfig) -> Result<Self, AppInitError> {
        let peer = HttpConsumptionPeer::new(peer).map_err(AppInitError::Peer)?;

        let consumptions: Arc<dyn ConsumptionsService> = Arc::new(ConsumptionResolver::new(
            Arc::new(PgConsumptionsRepository::new(pool.clone())),
            Arc::new(peer),
        ));

        let appliances = Arc::new(ApplianceRegistry::new(
            Arc::new(PgAppliancesRepository::new(pool)),
            consumptions.clone(),
        ));

        Ok(Self {
            appliances,
            consumptions,
        })
    }
}
