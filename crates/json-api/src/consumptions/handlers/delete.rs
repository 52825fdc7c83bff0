//! Delete Energy Consumption Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{consumptions::errors::into_status_error, extensions::*};

/// Delete Energy Consumption Handler
///
/// Appliances referencing the profile are detached from it.
#[endpoint(
    tags("consumptions"),
    summary = "Delete Energy Consumption",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Energy consumption deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Energy consumption not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .consumptions
        .delete_consumption(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
