//! Get Home Appliance By Name Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    appliances::{errors::into_status_error, models::ApplianceResponse},
    extensions::*,
};

/// Get Home Appliance By Name Handler
///
/// Names match regardless of case.
#[endpoint(
    tags("appliances"),
    summary = "Get Home Appliance By Name",
    responses(
        (status_code = StatusCode::OK, description = "Home appliance found"),
        (status_code = StatusCode::NOT_FOUND, description = "Home appliance not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApplianceResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let appliance = state
        .app
        .appliances
        .get_appliance_by_name(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(appliance.into()))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use happliance_app::appliances::{AppliancesServiceError, MockAppliancesService};

    use crate::test_helpers::{TEST_APPLIANCE_ID, appliances_service, make_appliance};

    use super::*;

    fn make_service(appliances: MockAppliancesService) -> Service {
        appliances_service(
            appliances,
            Router::with_path("appliances/name/{name}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_by_name_passes_the_name_through() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_get_appliance_by_name()
            .once()
            .with(eq("ENCERADEIRA"))
            .return_once(|_| Ok(make_appliance(TEST_APPLIANCE_ID, "Enceradeira")));

        let mut res = TestClient::get("http://example.com/appliances/name/ENCERADEIRA")
            .send(&make_service(appliances))
            .await;

        let body: ApplianceResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Enceradeira");

        Ok(())
    }

    #[tokio::test]
    async fn test_by_unknown_name_returns_404() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_get_appliance_by_name()
            .once()
            .return_once(|name| Err(AppliancesServiceError::NotFound(name.to_string())));

        let res = TestClient::get("http://example.com/appliances/name/Nothing")
            .send(&make_service(appliances))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
