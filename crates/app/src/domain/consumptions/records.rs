//! Energy Consumption Records

use rust_decimal::Decimal;

/// Stored energy consumption profile, keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyConsumption {
    /// Natural key. Stored case-sensitively, looked up case-insensitively.
    pub name: String,

    /// Power draw in watts.
    pub power: i32,

    /// Days of use per month.
    pub monthly_usage: Option<i32>,

    /// Minutes of use per day.
    pub daily_use: Option<i32>,

    /// Average monthly consumption in kWh.
    pub monthly_consumption_average: Option<Decimal>,
}
