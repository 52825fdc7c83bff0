//! Energy consumption payloads

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use happliance_app::{
    consumptions::{data::ConsumptionProfile, records::EnergyConsumption},
    pagination::Page,
};

/// Energy consumption profile as supplied by a client. Every field may be
/// omitted; the service decides what a usable profile is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConsumptionBody {
    /// Profile name, also its key
    pub name: Option<String>,

    /// Power draw in watts
    pub power: Option<i32>,

    /// Days of use per month
    pub monthly_usage: Option<i32>,

    /// Minutes of use per day
    pub daily_use: Option<i32>,

    /// Average monthly consumption in kWh
    pub monthly_consumption_average: Option<f64>,
}

impl TryFrom<ConsumptionBody> for ConsumptionProfile {
    type Error = rust_decimal::Error;

    fn try_from(body: ConsumptionBody) -> Result<Self, Self::Error> {
        Ok(ConsumptionProfile {
            name: body.name,
            power: body.power,
            monthly_usage: body.monthly_usage,
            daily_use: body.daily_use,
            monthly_consumption_average: body
                .monthly_consumption_average
                .map(Decimal::try_from)
                .transpose()?,
        })
    }
}

/// Stored energy consumption profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConsumptionResponse {
    pub name: String,
    pub power: i32,
    pub monthly_usage: Option<i32>,
    pub daily_use: Option<i32>,
    pub monthly_consumption_average: Option<f64>,
}

impl From<EnergyConsumption> for ConsumptionResponse {
    fn from(consumption: EnergyConsumption) -> Self {
        ConsumptionResponse {
            name: consumption.name,
            power: consumption.power,
            monthly_usage: consumption.monthly_usage,
            daily_use: consumption.daily_use,
            monthly_consumption_average: consumption
                .monthly_consumption_average
                .as_ref()
                .and_then(ToPrimitive::to_f64),
        }
    }
}

/// One page of energy consumption profiles.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConsumptionsResponse {
    pub content: Vec<ConsumptionResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<EnergyConsumption>> for ConsumptionsResponse {
    fn from(page: Page<EnergyConsumption>) -> Self {
        let page = page.map(ConsumptionResponse::from);

        ConsumptionsResponse {
            content: page.content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
