//! Register Energy Consumption Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use happliance_app::consumptions::data::ConsumptionProfile;

use crate::{
    consumptions::{
        errors::into_status_error,
        models::{ConsumptionBody, ConsumptionResponse},
    },
    extensions::*,
};

/// Register Energy Consumption Handler
#[endpoint(
    tags("consumptions"),
    summary = "Register Energy Consumption",
    responses(
        (status_code = StatusCode::CREATED, description = "Energy consumption registered or already stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ConsumptionBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ConsumptionResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let profile = ConsumptionProfile::try_from(json.into_inner())
        .or_400("monthlyConsumptionAverage is out of range")?;

    let consumption = state
        .app
        .consumptions
        .register_consumption(profile)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!(
            "/api/v1/consumptions/id/{}",
            urlencoding::encode(&consumption.name)
        ),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(consumption.into()))
}
