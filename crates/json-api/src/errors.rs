//! Shared error translation

use salvo::http::StatusError;

use happliance_app::domain::validation::FieldViolation;

/// Field violations become a 400 whose detail lists every `field: message`.
pub(crate) fn validation_error(violations: &[FieldViolation]) -> StatusError {
    let detail = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    StatusError::bad_request()
        .brief("Validation error")
        .detail(detail)
}
