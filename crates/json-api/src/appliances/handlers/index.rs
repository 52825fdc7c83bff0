//! Home Appliance Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use happliance_app::pagination::PageRequest;

use crate::{
    appliances::{errors::into_status_error, models::AppliancesResponse},
    extensions::*,
};

/// Home Appliance Index Handler
///
/// Returns one page of home appliances, ordered by name.
#[endpoint(tags("appliances"), summary = "List Home Appliances")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    size: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<AppliancesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let appliances = state
        .app
        .appliances
        .list_appliances(PageRequest::new(page.into_inner(), size.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(appliances.into()))
}
