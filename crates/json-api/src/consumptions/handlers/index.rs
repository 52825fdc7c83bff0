//! Energy Consumption Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use happliance_app::pagination::PageRequest;

use crate::{
    consumptions::{errors::into_status_error, models::ConsumptionsResponse},
    extensions::*,
};

/// Energy Consumption Index Handler
///
/// Returns one page of energy consumption profiles, ordered by name.
#[endpoint(tags("consumptions"), summary = "List Energy Consumptions")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    size: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ConsumptionsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let consumptions = state
        .app
        .consumptions
        .list_consumptions(PageRequest::new(page.into_inner(), size.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(consumptions.into()))
}
