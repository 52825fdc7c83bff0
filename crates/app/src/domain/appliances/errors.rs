//! Home appliance service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    appliances::attributes::InvalidCode,
    consumptions::ConsumptionsServiceError,
    validation::{FieldViolation, is_out_of_range},
};

#[derive(Debug, Error)]
pub enum AppliancesServiceError {
    #[error("a product is already registered as '{0}'")]
    ExistingResource(String),

    #[error("the product '{0}' was not found")]
    NotFound(String),

    #[error(transparent)]
    IncorrectValue(#[from] InvalidCode),

    #[error("invalid home appliance payload")]
    Validation(Vec<FieldViolation>),

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for AppliancesServiceError {
    fn from(error: Error) -> Self {
        let constraint = error
            .as_database_error()
            .and_then(DatabaseError::constraint)
            .unwrap_or("products")
            .to_owned();

        if is_out_of_range(&error) {
            return Self::Validation(vec![FieldViolation::new(
                constraint,
                "The value is out of range!",
            )]);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::ExistingResource(constraint),
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => {
                Self::Validation(vec![FieldViolation::new(
                    constraint,
                    "The value violates a storage constraint!",
                )])
            }
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => {
                Self::Storage(error)
            }
        }
    }
}

impl From<ConsumptionsServiceError> for AppliancesServiceError {
    fn from(error: ConsumptionsServiceError) -> Self {
        match error {
            ConsumptionsServiceError::ExistingResource(name) => Self::ExistingResource(name),
            ConsumptionsServiceError::NotFound(name) => Self::NotFound(name),
            ConsumptionsServiceError::Validation(violations) => Self::Validation(
                violations
                    .into_iter()
                    .map(|v| FieldViolation::new(format!("energyConsumption.{}", v.field), v.message))
                    .collect(),
            ),
            ConsumptionsServiceError::Storage(source) => Self::Storage(source),
        }
    }
}
