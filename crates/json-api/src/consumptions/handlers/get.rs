//! Get Energy Consumption Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    consumptions::{errors::into_status_error, models::ConsumptionResponse},
    extensions::*,
};

/// Get Energy Consumption Handler
///
/// Looks the profile up by its exact name.
#[endpoint(
    tags("consumptions"),
    summary = "Get Energy Consumption",
    responses(
        (status_code = StatusCode::OK, description = "Energy consumption found"),
        (status_code = StatusCode::NOT_FOUND, description = "Energy consumption not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ConsumptionResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let consumption = state
        .app
        .consumptions
        .get_consumption(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(consumption.into()))
}
