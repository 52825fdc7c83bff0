//! Delete Home Appliance Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{appliances::errors::into_status_error, extensions::*};

/// Delete Home Appliance Handler
#[endpoint(
    tags("appliances"),
    summary = "Delete Home Appliance",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Home appliance deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Home appliance not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .appliances
        .delete_appliance(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::TestClient;
    use testresult::TestResult;

    use happliance_app::appliances::{AppliancesServiceError, MockAppliancesService};

    use crate::test_helpers::{TEST_APPLIANCE_ID, appliances_service};

    use super::*;

    fn make_service(appliances: MockAppliancesService) -> Service {
        appliances_service(appliances, Router::with_path("appliances/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_appliance_success() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_delete_appliance()
            .once()
            .with(eq(TEST_APPLIANCE_ID))
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!(
            "http://example.com/appliances/{TEST_APPLIANCE_ID}"
        ))
        .send(&make_service(appliances))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_appliance_returns_404() -> TestResult {
        let mut appliances = MockAppliancesService::new();

        appliances
            .expect_delete_appliance()
            .once()
            .return_once(|id| Err(AppliancesServiceError::NotFound(id.to_string())));

        let res = TestClient::delete("http://example.com/appliances/missing")
            .send(&make_service(appliances))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
