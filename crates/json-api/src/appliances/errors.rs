//! Home Appliance Errors

use salvo::http::StatusError;
use tracing::error;

use happliance_app::appliances::AppliancesServiceError;

use crate::errors::validation_error;

pub(crate) fn into_status_error(error: AppliancesServiceError) -> StatusError {
    match error {
        AppliancesServiceError::ExistingResource(key) => StatusError::conflict()
            .brief("Home appliance already exists")
            .detail(format!("'{key}' is already registered")),
        AppliancesServiceError::NotFound(key) => StatusError::not_found()
            .brief("Home appliance not found")
            .detail(format!("nothing is registered as '{key}'")),
        AppliancesServiceError::IncorrectValue(code) => StatusError::bad_request()
            .brief("Incorrect value")
            .detail(code.to_string()),
        AppliancesServiceError::Validation(violations) => validation_error(&violations),
        AppliancesServiceError::Storage(source) => {
            error!("home appliance storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
