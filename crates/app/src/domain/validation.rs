//! Field-level validation failures.

use std::fmt::{Display, Formatter, Result as FmtResult};

use validator::{Validate, ValidationError, ValidationErrors};

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Runs the derived validators and flattens failures, sorted by field name.
pub(crate) fn violations<T: Validate>(value: &T) -> Vec<FieldViolation> {
    value
        .validate()
        .err()
        .map(|errors| flatten(&errors))
        .unwrap_or_default()
}

fn flatten(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(move |error| FieldViolation::new(field.to_string(), message_of(error)))
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));

    violations
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string)
}

/// Rejects names made only of whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }

    Ok(())
}

/// SQLSTATE raised when a value does not fit its column.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Whether storage rejected a value for being out of range.
pub(crate) fn is_out_of_range(error: &sqlx::Error) -> bool {
    error.as_database_error().and_then(|db| db.code()).as_deref()
        == Some(NUMERIC_VALUE_OUT_OF_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(
            custom(function = "not_blank", message = "must be filled in"),
            length(min = 3, message = "too short")
        )]
        name: String,

        #[validate(required(message = "required"))]
        power: Option<i32>,
    }

    #[test]
    fn valid_values_produce_no_violations() {
        let sample = Sample {
            name: "Fridge".to_string(),
            power: Some(100),
        };

        assert!(violations(&sample).is_empty());
    }

    #[test]
    fn violations_carry_field_and_message() {
        let sample = Sample {
            name: "ab".to_string(),
            power: None,
        };

        let found = violations(&sample);

        assert_eq!(
            found,
            vec![
                FieldViolation::new("name", "too short"),
                FieldViolation::new("power", "required"),
            ]
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        let sample = Sample {
            name: "    ".to_string(),
            power: Some(1),
        };

        let found = violations(&sample);

        assert_eq!(found, vec![FieldViolation::new("name", "must be filled in")]);
    }

    #[test]
    fn display_joins_field_and_message() {
        assert_eq!(
            FieldViolation::new("name", "too short").to_string(),
            "name: too short"
        );
    }
}
