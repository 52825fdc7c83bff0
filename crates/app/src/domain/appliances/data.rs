//! Home Appliance Data

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    domain::{
        appliances::attributes::{Classification, Voltage},
        consumptions::data::ConsumptionProfile,
        validation::{FieldViolation, not_blank, violations},
    },
    identifiers::{self, Identifier},
};

/// Appliance payload as supplied by a caller, before any defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ApplianceRequest {
    pub id: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "This field must be filled in!"),
        length(
            min = 3,
            max = 100,
            message = "This field must have from 3 to 100 characters maximum!"
        )
    )]
    pub name: String,

    pub description: Option<String>,

    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "This field must not be negative!"))]
    pub inventory: Option<i32>,

    #[validate(required(message = "This field must be filled in with a number!"))]
    pub voltage: Option<i16>,

    #[validate(required(message = "This field must be filled in with 'true' or 'false'!"))]
    pub portable: Option<bool>,

    pub classification: Option<i16>,

    pub energy_consumption: Option<ConsumptionProfile>,
}

impl ApplianceRequest {
    #[must_use]
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut found = violations(self);

        if self.price.is_some_and(|price| price.is_sign_negative()) {
            found.push(FieldViolation::new("price", "This field must not be negative!"));
            found.sort_by(|a, b| a.field.cmp(&b.field));
        }

        found
    }

    /// The attached consumption profile, unless it is absent or empty.
    #[must_use]
    pub fn consumption(&self) -> Option<&ConsumptionProfile> {
        self.energy_consumption
            .as_ref()
            .filter(|profile| !profile.is_empty())
    }
}

/// An appliance with every default applied, ready for consumption resolution
/// and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceDraft {
    pub id: Identifier,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub inventory: i32,
    pub voltage: Voltage,
    pub portable: bool,
    pub classification: Option<Classification>,
    pub energy_consumption: Option<ConsumptionProfile>,
}

/// Fills in the defaults of a request whose attributes are already decoded:
/// zero price, zero inventory, and an identifier from [`identifiers::assign`].
#[must_use]
pub fn apply_defaults(
    request: ApplianceRequest,
    voltage: Voltage,
    classification: Option<Classification>,
) -> ApplianceDraft {
    let energy_consumption = request.consumption().cloned();

    ApplianceDraft {
        id: identifiers::assign(request.id.as_deref()),
        name: request.name,
        description: request.description,
        price: request.price.unwrap_or(Decimal::ZERO),
        inventory: request.inventory.unwrap_or_default(),
        voltage,
        portable: request.portable.unwrap_or_default(),
        classification,
        energy_consumption,
    }
}
