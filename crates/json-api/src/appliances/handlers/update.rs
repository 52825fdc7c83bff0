//! Update Home Appliance Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use happliance_app::appliances::data::ApplianceRequest;

use crate::{
    appliances::{
        errors::into_status_error,
        models::{ApplianceBody, ApplianceResponse},
    },
    extensions::*,
};

/// Home Appliance Update Handler
///
/// Replaces the appliance stored under the path id. An id in the body is
/// ignored.
#[endpoint(
    tags("appliances"),
    summary = "Update Home Appliance",
    responses(
        (status_code = StatusCode::OK, description = "Home appliance updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Home appliance not found"),
        (status_code = StatusCode::CONFLICT, description = "Name already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ApplianceBody>,
    depot: &mut Depot,
) -> Result<Json<ApplianceResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = ApplianceRequest::try_from(json.into_inner())
        .or_400("a decimal field is out of range")?;

    let appliance = state
        .app
        .appliances
        .update_appliance(&id.into_inner(), request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(appliance.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use happliance_app::appliances::{AppliancesServiceError, MockAppliancesService};

    use crate::test_helpers::{TEST_APPLIANCE_ID, appliances_service, make_appliance};

    use super::*;

    fn make_service(appliances: MockAppliancesService) -> Service {
        appliances_service(appliances, Router::with_path("appliances/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_appliance_success() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_update_appliance()
            .once()
            .withf(|id, request| id == TEST_APPLIANCE_ID && request.name == "Enceradeira Pro")
            .return_once(|id, request| Ok(make_appliance(id, &request.name)));

        let mut res = TestClient::put(format!(
            "http://example.com/appliances/{TEST_APPLIANCE_ID}"
        ))
        .json(&json!({ "name": "Enceradeira Pro", "voltage": 2, "portable": true }))
        .send(&make_service(appliances))
        .await;

        let body: ApplianceResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, TEST_APPLIANCE_ID);
        assert_eq!(body.name, "Enceradeira Pro");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_appliance_returns_404() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_update_appliance()
            .once()
            .return_once(|id, _| Err(AppliancesServiceError::NotFound(id.to_string())));

        let res = TestClient::put("http://example.com/appliances/missing")
            .json(&json!({ "name": "Enceradeira", "voltage": 2, "portable": true }))
            .send(&make_service(appliances))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_rename_conflict_returns_409() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_update_appliance()
            .once()
            .return_once(|_, request| Err(AppliancesServiceError::ExistingResource(request.name)));

        let res = TestClient::put(format!(
            "http://example.com/appliances/{TEST_APPLIANCE_ID}"
        ))
        .json(&json!({ "name": "Aspirador", "voltage": 2, "portable": true }))
        .send(&make_service(appliances))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
