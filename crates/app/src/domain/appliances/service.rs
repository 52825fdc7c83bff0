//! Home Appliances Service
//!
//! The name uniqueness check is a pre-check only. Two concurrent registrations
//! of the same name can both pass it; the unique index on `lower(name)` is what
//! finally rejects the second one, surfacing as [`AppliancesServiceError::ExistingResource`].

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    domain::{
        appliances::{
            AppliancesServiceError,
            attributes::decode_attributes,
            data::{ApplianceDraft, ApplianceRequest, apply_defaults},
            records::{Appliance, ApplianceRecord},
            repository::AppliancesRepository,
        },
        consumptions::{ConsumptionsService, records::EnergyConsumption},
    },
    identifiers::Identifier,
    pagination::{Page, PageRequest},
};

/// Registers, updates and removes home appliances.
#[derive(Clone)]
pub struct ApplianceRegistry {
    repository: Arc<dyn AppliancesRepository>,
    consumptions: Arc<dyn ConsumptionsService>,
}

impl ApplianceRegistry {
    #[must_use]
    pub fn new(
        repository: Arc<dyn AppliancesRepository>,
        consumptions: Arc<dyn ConsumptionsService>,
    ) -> Self {
        Self {
            repository,
            consumptions,
        }
    }

    /// Validates the payload and decodes its attributes, in that order.
    fn prepare(request: ApplianceRequest) -> Result<ApplianceDraft, AppliancesServiceError> {
        let violations = request.violations();

        if !violations.is_empty() {
            return Err(AppliancesServiceError::Validation(violations));
        }

        let (voltage, classification) =
            decode_attributes(request.voltage, request.classification)?;

        Ok(apply_defaults(request, voltage, classification))
    }

    async fn ensure_name_available(
        &self,
        name: &str,
        owner: Option<&str>,
    ) -> Result<(), AppliancesServiceError> {
        let existing = self.repository.find_by_name_ignore_case(name).await?;

        match existing {
            Some(record) if owner != Some(record.id.as_str()) => {
                Err(AppliancesServiceError::ExistingResource(name.to_string()))
            }
            Some(_) | None => Ok(()),
        }
    }

    async fn persist(
        &self,
        id: String,
        draft: ApplianceDraft,
        energy_consumption: Option<EnergyConsumption>,
    ) -> Result<Appliance, AppliancesServiceError> {
        let name = draft.name.clone();

        let appliance = Appliance {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            inventory: draft.inventory,
            portable: draft.portable,
            voltage: draft.voltage,
            classification: draft.classification,
            energy_consumption,
        };

        let saved = self
            .repository
            .save(appliance.into_record())
            .await
            .map_err(|error| match AppliancesServiceError::from(error) {
                AppliancesServiceError::ExistingResource(_) => {
                    AppliancesServiceError::ExistingResource(name)
                }
                other => other,
            })?;

        Ok(Appliance::try_from(saved)?)
    }

    async fn load(&self, id: &str) -> Result<ApplianceRecord, AppliancesServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppliancesServiceError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl AppliancesService for ApplianceRegistry {
    #[tracing::instrument(
        name = "appliances.service.create_appliance",
        skip(self, request),
        fields(name = %request.name, appliance_id = tracing::field::Empty),
        err
    )]
    async fn create_appliance(
        &self,
        request: ApplianceRequest,
    ) -> Result<Appliance, AppliancesServiceError> {
        let mut draft = Self::prepare(request)?;

        self.ensure_name_available(&draft.name, None).await?;

        if let Identifier::Supplied(id) = &draft.id
            && self.repository.find_by_id(id).await?.is_some()
        {
            return Err(AppliancesServiceError::ExistingResource(id.clone()));
        }

        Span::current().record("appliance_id", tracing::field::display(draft.id.as_str()));

        let energy_consumption = match draft.energy_consumption.take() {
            Some(profile) => self.consumptions.save_consumption(profile).await?,
            None => None,
        };

        let id = draft.id.as_str().to_owned();
        let created = self.persist(id, draft, energy_consumption).await?;

        info!(appliance_id = %created.id, "created home appliance");

        Ok(created)
    }

    #[tracing::instrument(
        name = "appliances.service.update_appliance",
        skip(self, request),
        fields(appliance_id = %id),
        err
    )]
    async fn update_appliance(
        &self,
        id: &str,
        request: ApplianceRequest,
    ) -> Result<Appliance, AppliancesServiceError> {
        let mut draft = Self::prepare(request)?;

        let existing = self.load(id).await?;

        if draft.name != existing.name {
            self.ensure_name_available(&draft.name, Some(id)).await?;
        }

        let energy_consumption = match draft.energy_consumption.take() {
            None => None,
            Some(profile) => match existing.energy_consumption {
                Some(current) if profile.name.as_deref() == Some(current.name.as_str()) => {
                    Some(current)
                }
                Some(_) | None => self.consumptions.save_consumption(profile).await?,
            },
        };

        let updated = self.persist(id.to_owned(), draft, energy_consumption).await?;

        info!(appliance_id = %updated.id, "updated home appliance");

        Ok(updated)
    }

    #[tracing::instrument(name = "appliances.service.delete_appliance", skip(self), err)]
    async fn delete_appliance(&self, id: &str) -> Result<(), AppliancesServiceError> {
        self.load(id).await?;

        let rows_affected = self.repository.delete_by_id(id).await?;

        if rows_affected == 0 {
            return Err(AppliancesServiceError::NotFound(id.to_string()));
        }

        info!(appliance_id = %id, "deleted home appliance");

        Ok(())
    }

    async fn get_appliance(&self, id: &str) -> Result<Appliance, AppliancesServiceError> {
        Ok(Appliance::try_from(self.load(id).await?)?)
    }

    async fn get_appliance_by_name(&self, name: &str) -> Result<Appliance, AppliancesServiceError> {
        let record = self
            .repository
            .find_by_name_ignore_case(name)
            .await?
            .ok_or_else(|| AppliancesServiceError::NotFound(name.to_string()))?;

        Ok(Appliance::try_from(record)?)
    }

    async fn list_appliances(
        &self,
        page: PageRequest,
    ) -> Result<Page<Appliance>, AppliancesServiceError> {
        let records = self.repository.find_all(page).await?;

        Ok(records.try_map(Appliance::try_from)?)
    }
}

#[automock]
#[async_trait]
pub trait AppliancesService: Send + Sync {
    /// Registers a new appliance: validate, decode attributes, check the name,
    /// apply defaults and check the id, resolve the consumption, then persist.
    async fn create_appliance(
        &self,
        request: ApplianceRequest,
    ) -> Result<Appliance, AppliancesServiceError>;

    /// Replaces the appliance stored under `id`. The body's id is ignored.
    async fn update_appliance(
        &self,
        id: &str,
        request: ApplianceRequest,
    ) -> Result<Appliance, AppliancesServiceError>;

    async fn delete_appliance(&self, id: &str) -> Result<(), AppliancesServiceError>;

    async fn get_appliance(&self, id: &str) -> Result<Appliance, AppliancesServiceError>;

    /// Case-insensitive name lookup.
    async fn get_appliance_by_name(&self, name: &str) -> Result<Appliance, AppliancesServiceError>;

    async fn list_appliances(
        &self,
        page: PageRequest,
    ) -> Result<Page<Appliance>, AppliancesServiceError>;
}
