//! Energy Consumption Data

use rust_decimal::Decimal;
use validator::Validate;

use crate::domain::{
    consumptions::records::EnergyConsumption,
    validation::{FieldViolation, violations},
};

/// Shortest name a profile can be resolved by.
pub const MIN_PROFILE_NAME_LENGTH: usize = 3;

/// Energy consumption profile as supplied by a caller. Every field may be
/// missing; an all-empty profile represents "no consumption".
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ConsumptionProfile {
    #[validate(
        required(message = "This field must be filled in!"),
        length(
            min = 3,
            max = 100,
            message = "This field must have from 3 to 100 characters maximum!"
        )
    )]
    pub name: Option<String>,

    #[validate(required(message = "This field must be filled in with numbers!"))]
    pub power: Option<i32>,

    pub monthly_usage: Option<i32>,

    pub daily_use: Option<i32>,

    pub monthly_consumption_average: Option<Decimal>,
}

impl ConsumptionProfile {
    /// A profile carrying only a name.
    #[cfg(test)]
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A profile can be resolved only with a usable name and a power value.
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        let named = self
            .name
            .as_deref()
            .is_some_and(|name| name.chars().count() >= MIN_PROFILE_NAME_LENGTH);

        named && self.power.is_some()
    }

    #[must_use]
    pub fn violations(&self) -> Vec<FieldViolation> {
        violations(self)
    }
}

impl From<EnergyConsumption> for ConsumptionProfile {
    fn from(consumption: EnergyConsumption) -> Self {
        Self {
            name: Some(consumption.name),
            power: Some(consumption.power),
            monthly_usage: consumption.monthly_usage,
            daily_use: consumption.daily_use,
            monthly_consumption_average: consumption.monthly_consumption_average,
        }
    }
}

impl EnergyConsumption {
    /// Builds a storable record from a profile that has a name and a power.
    #[must_use]
    pub fn from_profile(profile: ConsumptionProfile) -> Option<Self> {
        Some(Self {
            name: profile.name?,
            power: profile.power?,
            monthly_usage: profile.monthly_usage,
            daily_use: profile.daily_use,
            monthly_consumption_average: profile.monthly_consumption_average,
        })
    }
}
