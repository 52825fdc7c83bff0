//! Energy Consumption Errors

use salvo::http::StatusError;
use tracing::error;

use happliance_app::consumptions::ConsumptionsServiceError;

use crate::errors::validation_error;

pub(crate) fn into_status_error(error: ConsumptionsServiceError) -> StatusError {
    match error {
        ConsumptionsServiceError::ExistingResource(name) => StatusError::conflict()
            .brief("Energy consumption already exists")
            .detail(format!("an energy consumption named '{name}' is already registered")),
        ConsumptionsServiceError::NotFound(name) => StatusError::not_found()
            .brief("Energy consumption not found")
            .detail(format!("no energy consumption is named '{name}'")),
        ConsumptionsServiceError::Validation(violations) => validation_error(&violations),
        ConsumptionsServiceError::Storage(source) => {
            error!("energy consumption storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
