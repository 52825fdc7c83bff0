//! Home Appliance Records

use rust_decimal::Decimal;

use crate::domain::{
    appliances::attributes::{Classification, InvalidCode, Voltage, decode_attributes},
    consumptions::records::EnergyConsumption,
};

/// Discriminator stored in `products.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    HomeAppliance,
}

impl ProductKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomeAppliance => "home_appliance",
        }
    }
}

/// A home appliance row as stored, with its attributes still encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub inventory: i32,
    pub portable: bool,
    pub voltage: i16,
    pub classification: Option<i16>,
    pub energy_consumption: Option<EnergyConsumption>,
}

/// A home appliance with decoded attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appliance {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub inventory: i32,
    pub portable: bool,
    pub voltage: Voltage,
    pub classification: Option<Classification>,
    pub energy_consumption: Option<EnergyConsumption>,
}

impl Appliance {
    /// Encodes the appliance for storage.
    #[must_use]
    pub fn into_record(self) -> ApplianceRecord {
        ApplianceRecord {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            inventory: self.inventory,
            portable: self.portable,
            voltage: self.voltage.code(),
            classification: self.classification.map(Classification::code),
            energy_consumption: self.energy_consumption,
        }
    }
}

impl TryFrom<ApplianceRecord> for Appliance {
    type Error = InvalidCode;

    fn try_from(record: ApplianceRecord) -> Result<Self, Self::Error> {
        let (voltage, classification) =
            decode_attributes(Some(record.voltage), record.classification)?;

        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            inventory: record.inventory,
            portable: record.portable,
            voltage,
            classification,
            energy_consumption: record.energy_consumption,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(voltage: i16, classification: Option<i16>) -> ApplianceRecord {
        ApplianceRecord {
            id: "9b2f7a1e-3c4d-4e5f-8a6b-7c8d9e0f1a2b".to_string(),
            name: "Vacuum".to_string(),
            description: None,
            price: Decimal::ZERO,
            inventory: 0,
            portable: true,
            voltage,
            classification,
            energy_consumption: None,
        }
    }

    #[test]
    fn stored_codes_decode() {
        let appliance = Appliance::try_from(record(2, Some(0)));

        assert_eq!(
            appliance.map(|a| (a.voltage, a.classification)),
            Ok((Voltage::Bivoltage, Some(Classification::A)))
        );
    }

    #[test]
    fn corrupt_stored_code_is_an_error() {
        assert_eq!(
            Appliance::try_from(record(0, Some(42))),
            Err(InvalidCode::Classification(42))
        );
    }

    #[test]
    fn into_record_encodes_attributes() {
        let original = record(1, None);

        let decoded = Appliance::try_from(original.clone());

        assert_eq!(decoded.map(Appliance::into_record), Ok(original));
    }
}
