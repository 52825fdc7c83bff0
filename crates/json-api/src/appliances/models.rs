//! Home appliance payloads

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use happliance_app::{
    appliances::{data::ApplianceRequest, records::Appliance},
    pagination::Page,
};

use crate::consumptions::models::{ConsumptionBody, ConsumptionResponse};

/// Home appliance as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplianceBody {
    /// Identifier; replaced when absent or malformed
    pub id: Option<String>,

    /// Display name, unique regardless of case
    #[serde(default)]
    pub name: String,

    pub description: Option<String>,

    /// Unit price, `0` when omitted
    pub price: Option<f64>,

    /// Units in stock, `0` when omitted
    pub inventory: Option<i32>,

    /// Voltage code: 0 = 127V, 1 = 230V, 2 = 127V/230V
    pub voltage: Option<i16>,

    pub portable: Option<bool>,

    /// Efficiency class code, 0 (A) through 6 (G)
    pub classification: Option<i16>,

    pub energy_consumption: Option<ConsumptionBody>,
}

impl TryFrom<ApplianceBody> for ApplianceRequest {
    type Error = rust_decimal::Error;

    fn try_from(body: ApplianceBody) -> Result<Self, Self::Error> {
        Ok(ApplianceRequest {
            id: body.id,
            name: body.name,
            description: body.description,
            price: body.price.map(Decimal::try_from).transpose()?,
            inventory: body.inventory,
            voltage: body.voltage,
            portable: body.portable,
            classification: body.classification,
            energy_consumption: body
                .energy_consumption
                .map(TryInto::try_into)
                .transpose()?,
        })
    }
}

/// Stored home appliance. Enumerated attributes are reported by code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplianceResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub inventory: i32,
    pub voltage: i16,
    pub portable: bool,
    pub classification: Option<i16>,
    pub energy_consumption: Option<ConsumptionResponse>,
}

impl From<Appliance> for ApplianceResponse {
    fn from(appliance: Appliance) -> Self {
        ApplianceResponse {
            id: appliance.id,
            name: appliance.name,
            description: appliance.description,
            price: appliance.price.to_f64().unwrap_or_default(),
            inventory: appliance.inventory,
            voltage: appliance.voltage.code(),
            portable: appliance.portable,
            classification: appliance.classification.map(i16::from),
            energy_consumption: appliance.energy_consumption.map(Into::into),
        }
    }
}

/// One page of home appliances.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppliancesResponse {
    pub content: Vec<ApplianceResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Appliance>> for AppliancesResponse {
    fn from(page: Page<Appliance>) -> Self {
        let page = page.map(ApplianceResponse::from);

        AppliancesResponse {
            content: page.content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
