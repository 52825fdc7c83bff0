//! Start-up fixture data.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::{
    appliances::{AppliancesService, AppliancesServiceError, data::ApplianceRequest},
    consumptions::{ConsumptionsService, ConsumptionsServiceError, data::ConsumptionProfile},
};

const FIXTURE_NAME: &str = "Enceradeira";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to seed energy consumption")]
    Consumptions(#[from] ConsumptionsServiceError),

    #[error("failed to seed home appliance")]
    Appliances(#[from] AppliancesServiceError),
}

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub consumption_created: bool,
    pub appliance_created: bool,
}

fn fixture_consumption() -> ConsumptionProfile {
    ConsumptionProfile {
        name: Some(FIXTURE_NAME.to_string()),
        power: Some(180),
        monthly_usage: Some(4),
        daily_use: Some(120),
        monthly_consumption_average: Some(Decimal::new(165, 1)),
    }
}

fn fixture_appliance() -> ApplianceRequest {
    ApplianceRequest {
        name: FIXTURE_NAME.to_string(),
        description: Some("Enceradeira para piso sintético".to_string()),
        voltage: Some(0),
        portable: Some(true),
        classification: Some(2),
        energy_consumption: Some(fixture_consumption()),
        ..ApplianceRequest::default()
    }
}

/// Inserts the fixture profile and appliance when they are absent.
///
/// # Errors
///
/// Returns the first service error other than "not found".
pub async fn seed(
    appliances: &dyn AppliancesService,
    consumptions: &dyn ConsumptionsService,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    match consumptions.find_stored_consumption(FIXTURE_NAME).await? {
        Some(stored) => info!(name = %stored.name, "energy consumption fixture already present"),
        None => {
            consumptions
                .register_consumption(fixture_consumption())
                .await?;

            report.consumption_created = true;
        }
    }

    match appliances.get_appliance_by_name(FIXTURE_NAME).await {
        Ok(_) => info!(name = FIXTURE_NAME, "home appliance fixture already present"),
        Err(AppliancesServiceError::NotFound(_)) => {
            let created = appliances.create_appliance(fixture_appliance()).await?;

            info!(appliance_id = %created.id, "seeded home appliance");

            report.appliance_created = true;
        }
        Err(error) => return Err(error.into()),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        appliances::{
            MockAppliancesService,
            attributes::{Classification, Voltage},
            records::Appliance,
        },
        consumptions::{MockConsumptionsService, records::EnergyConsumption},
        identifiers,
    };

    use super::*;

    fn stored_consumption() -> EnergyConsumption {
        EnergyConsumption::from_profile(fixture_consumption()).expect("fixture is complete")
    }

    fn stored_appliance() -> Appliance {
        Appliance {
            id: identifiers::generate(),
            name: FIXTURE_NAME.to_string(),
            description: None,
            price: Decimal::ZERO,
            inventory: 0,
            portable: true,
            voltage: Voltage::Monovoltage127,
            classification: Some(Classification::C),
            energy_consumption: Some(stored_consumption()),
        }
    }

    #[tokio::test]
    async fn seeds_missing_fixtures() -> TestResult {
        let mut appliances = MockAppliancesService::new();
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_find_stored_consumption()
            .once()
            .return_once(|_| Ok(None));

        consumptions
            .expect_register_consumption()
            .withf(|profile| profile.power == Some(180))
            .once()
            .return_once(|_| Ok(stored_consumption()));

        appliances
            .expect_get_appliance_by_name()
            .once()
            .return_once(|name| Err(AppliancesServiceError::NotFound(name.to_string())));

        appliances
            .expect_create_appliance()
            .withf(|request| request.voltage == Some(0) && request.classification == Some(2))
            .once()
            .return_once(|_| Ok(stored_appliance()));

        let report = seed(&appliances, &consumptions).await?;

        assert_eq!(
            report,
            SeedReport {
                consumption_created: true,
                appliance_created: true,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn present_fixtures_are_left_alone() -> TestResult {
        let mut appliances = MockAppliancesService::new();
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_find_stored_consumption()
            .once()
            .return_once(|_| Ok(Some(stored_consumption())));

        consumptions.expect_register_consumption().never();

        appliances
            .expect_get_appliance_by_name()
            .once()
            .return_once(|_| Ok(stored_appliance()));

        appliances.expect_create_appliance().never();

        let report = seed(&appliances, &consumptions).await?;

        assert_eq!(report, SeedReport::default());

        Ok(())
    }

    #[tokio::test]
    async fn fixture_stored_in_another_case_counts_as_present() -> TestResult {
        let mut appliances = MockAppliancesService::new();
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_find_stored_consumption()
            .withf(|name| name == FIXTURE_NAME)
            .once()
            .return_once(|_| {
                Ok(Some(EnergyConsumption {
                    name: "enceradeira".to_string(),
                    ..stored_consumption()
                }))
            });

        consumptions.expect_register_consumption().never();

        appliances
            .expect_get_appliance_by_name()
            .once()
            .return_once(|_| Ok(stored_appliance()));

        appliances.expect_create_appliance().never();

        let report = seed(&appliances, &consumptions).await?;

        assert!(!report.consumption_created);

        Ok(())
    }

    #[tokio::test]
    async fn storage_failures_abort_the_run() -> TestResult {
        let appliances = MockAppliancesService::new();
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_find_stored_consumption()
            .once()
            .return_once(|_| Err(ConsumptionsServiceError::Storage(sqlx::Error::PoolTimedOut)));

        let result = seed(&appliances, &consumptions).await;

        assert!(
            matches!(result, Err(SeedError::Consumptions(_))),
            "expected a consumption error, got {result:?}"
        );

        Ok(())
    }
}
