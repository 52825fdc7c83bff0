//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use happliance_app::{
    appliances::{
        MockAppliancesService,
        attributes::{Classification, Voltage},
        records::Appliance,
    },
    consumptions::{MockConsumptionsService, records::EnergyConsumption},
    context::AppContext,
};

use crate::state::State;

pub(crate) const TEST_APPLIANCE_ID: &str = "3f2b8c1e-5d4a-4e7b-9c3d-2a1f0e9d8c7b";

pub(crate) fn make_consumption(name: &str) -> EnergyConsumption {
    EnergyConsumption {
        name: name.to_string(),
        power: 180,
        monthly_usage: Some(4),
        daily_use: Some(120),
        monthly_consumption_average: Some(Decimal::new(165, 1)),
    }
}

pub(crate) fn make_appliance(id: &str, name: &str) -> Appliance {
    Appliance {
        id: id.to_string(),
        name: name.to_string(),
        description: Some("Floor polisher".to_string()),
        price: Decimal::new(19_990, 2),
        inventory: 3,
        portable: true,
        voltage: Voltage::Bivoltage,
        classification: Some(Classification::A),
        energy_consumption: Some(make_consumption(name)),
    }
}

fn strict_appliances_mock() -> MockAppliancesService {
    let mut appliances = MockAppliancesService::new();

    appliances.expect_create_appliance().never();
    appliances.expect_update_appliance().never();
    appliances.expect_delete_appliance().never();
    appliances.expect_get_appliance().never();
    appliances.expect_get_appliance_by_name().never();
    appliances.expect_list_appliances().never();

    appliances
}

fn strict_consumptions_mock() -> MockConsumptionsService {
    let mut consumptions = MockConsumptionsService::new();

    consumptions.expect_save_consumption().never();
    consumptions.expect_register_consumption().never();
    consumptions
        .expect_find_consumption_by_name_ignore_case()
        .never();
    consumptions.expect_find_stored_consumption().never();
    consumptions.expect_get_consumption().never();
    consumptions.expect_list_consumptions().never();
    consumptions.expect_update_consumption().never();
    consumptions.expect_delete_consumption().never();

    consumptions
}

fn state(appliances: MockAppliancesService, consumptions: MockConsumptionsService) -> Arc<State> {
    State::from_app_context(AppContext {
        appliances: Arc::new(appliances),
        consumptions: Arc::new(consumptions),
    })
}

pub(crate) fn appliances_service(appliances: MockAppliancesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(appliances, strict_consumptions_mock())))
            .push(route),
    )
}

pub(crate) fn consumptions_service(consumptions: MockConsumptionsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_appliances_mock(), consumptions)))
            .push(route),
    )
}
