//! Update Energy Consumption Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use happliance_app::consumptions::data::ConsumptionProfile;

use crate::{
    consumptions::{
        errors::into_status_error,
        models::{ConsumptionBody, ConsumptionResponse},
    },
    extensions::*,
};

/// Energy Consumption Update Handler
///
/// The path name is the key; a different name in the body is ignored.
#[endpoint(
    tags("consumptions"),
    summary = "Update Energy Consumption",
    responses(
        (status_code = StatusCode::OK, description = "Energy consumption updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Energy consumption not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    json: JsonBody<ConsumptionBody>,
    depot: &mut Depot,
) -> Result<Json<ConsumptionResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let profile = ConsumptionProfile::try_from(json.into_inner())
        .or_400("monthlyConsumptionAverage is out of range")?;

    let consumption = state
        .app
        .consumptions
        .update_consumption(&name.into_inner(), profile)
        .await
        .map_err(into_status_error)?;

    Ok(Json(consumption.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use happliance_app::consumptions::{ConsumptionsServiceError, MockConsumptionsService};

    use crate::test_helpers::{consumptions_service, make_consumption};

    use super::*;

    fn make_service(consumptions: MockConsumptionsService) -> Service {
        consumptions_service(
            consumptions,
            Router::with_path("consumptions/{name}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_consumption_success() -> TestResult {
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_update_consumption()
            .once()
            .withf(|name, profile| name == "Enceradeira" && profile.power == Some(250))
            .return_once(|name, _| {
                let mut consumption = make_consumption(name);
                consumption.power = 250;

                Ok(consumption)
            });

        let mut res = TestClient::put("http://example.com/consumptions/Enceradeira")
            .json(&json!({ "name": "Other", "power": 250 }))
            .send(&make_service(consumptions))
            .await;

        let body: ConsumptionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Enceradeira");
        assert_eq!(body.power, 250);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_consumption_returns_404() -> TestResult {
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_update_consumption()
            .once()
            .return_once(|name, _| Err(ConsumptionsServiceError::NotFound(name.to_string())));

        let res = TestClient::put("http://example.com/consumptions/Nothing")
            .json(&json!({ "power": 250 }))
            .send(&make_service(consumptions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_out_of_range_average_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/consumptions/Enceradeira")
            .json(&json!({ "power": 250, "monthlyConsumptionAverage": 1.0e300 }))
            .send(&make_service(MockConsumptionsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
