//! Energy Consumptions Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::consumptions::{
        ConsumptionsServiceError,
        data::ConsumptionProfile,
        peer::ConsumptionPeer,
        records::EnergyConsumption,
        repository::ConsumptionsRepository,
    },
    pagination::{Page, PageRequest},
};

/// Where a profile was resolved from.
#[derive(Debug)]
enum Resolution {
    Local(EnergyConsumption),
    Remote(EnergyConsumption),
    Fallback(ConsumptionProfile),
}

impl Resolution {
    fn into_profile(self) -> ConsumptionProfile {
        match self {
            Self::Local(consumption) | Self::Remote(consumption) => consumption.into(),
            Self::Fallback(profile) => profile,
        }
    }
}

/// Resolves energy consumption profiles from the local store, then the remote
/// peer, then the caller's own input.
#[derive(Clone)]
pub struct ConsumptionResolver {
    repository: Arc<dyn ConsumptionsRepository>,
    peer: Arc<dyn ConsumptionPeer>,
}

impl ConsumptionResolver {
    #[must_use]
    pub fn new(repository: Arc<dyn ConsumptionsRepository>, peer: Arc<dyn ConsumptionPeer>) -> Self {
        Self { repository, peer }
    }

    async fn resolve(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<Resolution, ConsumptionsServiceError> {
        let Some(name) = profile.name.as_deref() else {
            return Ok(Resolution::Fallback(profile));
        };

        if let Some(local) = self.repository.find_by_name_ignore_case(name).await? {
            return Ok(Resolution::Local(local));
        }

        match self.peer.fetch_consumption(name).await {
            Ok(remote) => {
                info!(name = %remote.name, "resolved energy consumption from peer");

                Ok(Resolution::Remote(remote))
            }
            Err(error) => {
                warn!(%name, error = %error, "consumption peer lookup failed, using supplied profile");

                Ok(Resolution::Fallback(profile))
            }
        }
    }

    /// Writes a resolved profile unless it came from the local store.
    async fn store(
        &self,
        resolution: Resolution,
    ) -> Result<Option<EnergyConsumption>, ConsumptionsServiceError> {
        let resolved = match resolution {
            Resolution::Local(stored) => return Ok(Some(stored)),
            Resolution::Remote(remote) => remote,
            Resolution::Fallback(profile) => {
                let Some(consumption) = EnergyConsumption::from_profile(profile) else {
                    return Ok(None);
                };

                consumption
            }
        };

        let saved = self.repository.save(resolved).await?;

        info!(name = %saved.name, "saved energy consumption");

        Ok(Some(saved))
    }
}

#[async_trait]
impl ConsumptionsService for ConsumptionResolver {
    #[tracing::instrument(
        name = "consumptions.service.save_consumption",
        skip(self, profile),
        fields(name = profile.name.as_deref().unwrap_or_default()),
        err
    )]
    async fn save_consumption(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<Option<EnergyConsumption>, ConsumptionsServiceError> {
        if !profile.is_resolvable() {
            info!("energy consumption profile is incomplete, nothing attached");

            return Ok(None);
        }

        let resolution = self.resolve(profile).await?;

        self.store(resolution).await
    }

    #[tracing::instrument(
        name = "consumptions.service.register_consumption",
        skip(self, profile),
        fields(name = profile.name.as_deref().unwrap_or_default()),
        err
    )]
    async fn register_consumption(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError> {
        let violations = profile.violations();

        if !violations.is_empty() {
            return Err(ConsumptionsServiceError::Validation(violations));
        }

        let resolution = self.resolve(profile).await?;

        self.store(resolution)
            .await?
            .ok_or_else(|| ConsumptionsServiceError::Validation(Vec::new()))
    }

    async fn find_consumption_by_name_ignore_case(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<ConsumptionProfile, ConsumptionsServiceError> {
        Ok(self.resolve(profile).await?.into_profile())
    }

    async fn find_stored_consumption(
        &self,
        name: &str,
    ) -> Result<Option<EnergyConsumption>, ConsumptionsServiceError> {
        Ok(self.repository.find_by_name_ignore_case(name).await?)
    }

    async fn get_consumption(
        &self,
        name: &str,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ConsumptionsServiceError::NotFound(name.to_string()))
    }

    async fn list_consumptions(
        &self,
        page: PageRequest,
    ) -> Result<Page<EnergyConsumption>, ConsumptionsServiceError> {
        Ok(self.repository.find_all(page).await?)
    }

    #[tracing::instrument(
        name = "consumptions.service.update_consumption",
        skip(self, profile),
        err
    )]
    async fn update_consumption(
        &self,
        name: &str,
        profile: ConsumptionProfile,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError> {
        if self.repository.find_by_name(name).await?.is_none() {
            return Err(ConsumptionsServiceError::NotFound(name.to_string()));
        }

        let profile = ConsumptionProfile {
            name: Some(name.to_string()),
            ..profile
        };

        let violations = profile.violations();

        if !violations.is_empty() {
            return Err(ConsumptionsServiceError::Validation(violations));
        }

        let Some(consumption) = EnergyConsumption::from_profile(profile) else {
            return Err(ConsumptionsServiceError::Validation(Vec::new()));
        };

        Ok(self.repository.save(consumption).await?)
    }

    #[tracing::instrument(name = "consumptions.service.delete_consumption", skip(self), err)]
    async fn delete_consumption(&self, name: &str) -> Result<(), ConsumptionsServiceError> {
        if self.repository.find_by_name(name).await?.is_none() {
            return Err(ConsumptionsServiceError::NotFound(name.to_string()));
        }

        let rows_affected = self.repository.delete_by_name(name).await?;

        if rows_affected == 0 {
            return Err(ConsumptionsServiceError::NotFound(name.to_string()));
        }

        info!(%name, "deleted energy consumption");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ConsumptionsService: Send + Sync {
    /// Resolves `profile` and stores it when it did not come from the local
    /// store. Returns `None`, writing nothing, when the profile lacks a usable
    /// name or a power value.
    async fn save_consumption(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<Option<EnergyConsumption>, ConsumptionsServiceError>;

    /// Validates `profile`, then resolves and stores it like
    /// [`Self::save_consumption`]. A profile already stored under the same
    /// name, in any case, is returned as is.
    async fn register_consumption(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError>;

    /// Local store, then remote peer, then `profile` itself. Peer failures are
    /// logged and never returned.
    async fn find_consumption_by_name_ignore_case(
        &self,
        profile: ConsumptionProfile,
    ) -> Result<ConsumptionProfile, ConsumptionsServiceError>;

    /// Local store only, ignoring case.
    async fn find_stored_consumption(
        &self,
        name: &str,
    ) -> Result<Option<EnergyConsumption>, ConsumptionsServiceError>;

    /// Exact-key lookup.
    async fn get_consumption(
        &self,
        name: &str,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError>;

    async fn list_consumptions(
        &self,
        page: PageRequest,
    ) -> Result<Page<EnergyConsumption>, ConsumptionsServiceError>;

    /// Overwrites the profile stored under `name`. The body's name is ignored.
    async fn update_consumption(
        &self,
        name: &str,
        profile: ConsumptionProfile,
    ) -> Result<EnergyConsumption, ConsumptionsServiceError>;

    async fn delete_consumption(&self, name: &str) -> Result<(), ConsumptionsServiceError>;
}
