//! Energy consumption service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::{FieldViolation, is_out_of_range};

#[derive(Debug, Error)]
pub enum ConsumptionsServiceError {
    #[error("the energy consumption '{0}' is already registered")]
    ExistingResource(String),

    #[error("the energy consumption '{0}' was not found")]
    NotFound(String),

    #[error("invalid energy consumption payload")]
    Validation(Vec<FieldViolation>),

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for ConsumptionsServiceError {
    fn from(error: Error) -> Self {
        let constraint = error
            .as_database_error()
            .and_then(DatabaseError::constraint)
            .unwrap_or("energy_consumptions")
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

#[cfg(test)]
mod tests {
    use crate::test::FakeDatabaseError;

    use super::*;

    #[test]
    fn out_of_range_averages_are_validation_errors() {
        let error = ConsumptionsServiceError::from(FakeDatabaseError::numeric_overflow());

        let ConsumptionsServiceError::Validation(violations) = error else {
            panic!("expected Validation, got {error:?}");
        };

        assert_eq!(
            violations,
            vec![FieldViolation::new(
                "energy_consumptions",
                "The value is out of range!"
            )]
        );
    }

    #[test]
    fn row_level_errors_become_storage_errors() {
        let error = ConsumptionsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, ConsumptionsServiceError::Storage(Error::PoolTimedOut)),
            "expected Storage, got {error:?}"
        );
    }

    #[test]
    fn not_found_message_names_the_profile() {
        let error = ConsumptionsServiceError::NotFound("Enceradeira".to_string());

        assert_eq!(
            error.to_string(),
            "the energy consumption 'Enceradeira' was not found"
        );
    }
}
