//! Get Home Appliance Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    appliances::{errors::into_status_error, models::ApplianceResponse},
    extensions::*,
};

/// Get Home Appliance Handler
#[endpoint(
    tags("appliances"),
    summary = "Get Home Appliance",
    responses(
        (status_code = StatusCode::OK, description = "Home appliance found"),
        (status_code = StatusCode::NOT_FOUND, description = "Home appliance not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Stored attribute code is unknown"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApplianceResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let appliance = state
        .app
        .appliances
        .get_appliance(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(appliance.into()))
}
