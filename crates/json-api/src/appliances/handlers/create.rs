//! Register Home Appliance Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use happliance_app::appliances::data::ApplianceRequest;

use crate::{
    appliances::{
        errors::into_status_error,
        models::{ApplianceBody, ApplianceResponse},
    },
    extensions::*,
};

/// Register Home Appliance Handler
#[endpoint(
    tags("appliances"),
    summary = "Register Home Appliance",
    responses(
        (status_code = StatusCode::CREATED, description = "Home appliance registered"),
        (status_code = StatusCode::CONFLICT, description = "Name or id already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplianceBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApplianceResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = ApplianceRequest::try_from(json.into_inner())
        .or_400("a decimal field is out of range")?;

    let appliance = state
        .app
        .appliances
        .create_appliance(request)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/api/v1/appliances/id/{}", appliance.id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(appliance.into()))
}
