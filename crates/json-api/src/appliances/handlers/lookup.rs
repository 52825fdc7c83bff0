//! Energy Consumption Lookup Handler
//!
//! The endpoint other registries call when resolving a profile they do not
//! hold. It answers from the local store only, so two registries pointing at
//! each other never loop.

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    consumptions::{errors::into_status_error, models::ConsumptionResponse},
    extensions::*,
};

/// Energy Consumption Lookup Handler
#[endpoint(
    tags("appliances"),
    summary = "Look Up Energy Consumption By Name",
    responses(
        (status_code = StatusCode::OK, description = "Energy consumption found"),
        (status_code = StatusCode::NOT_FOUND, description = "Energy consumption not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing name"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, true>,
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

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use happliance_app::consumptions::{ConsumptionsServiceError, MockConsumptionsService};

    use crate::test_helpers::{consumptions_service, make_consumption};

    use super::*;

    fn make_service(consumptions: MockConsumptionsService) -> Service {
        consumptions_service(consumptions, Router::with_path("appliances/name").get(handler))
    }

    #[tokio::test]
    async fn test_lookup_answers_in_peer_shape() -> TestResult {
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_get_consumption()
            .once()
            .with(eq("Secador de cabelo"))
            .return_once(|name| Ok(make_consumption(name)));

        let mut res = TestClient::get("http://example.com/appliances/name?name=Secador%20de%20cabelo")
            .send(&make_service(consumptions))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["name"], "Secador de cabelo");
        assert_eq!(body["power"], 180);
        assert_eq!(body["monthlyConsumptionAverage"], 16.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_lookup_miss_returns_404() -> TestResult {
        let mut consumptions = MockConsumptionsService::new();

        consumptions
            .expect_get_consumption()
            .once()
            .return_once(|name| Err(ConsumptionsServiceError::NotFound(name.to_string())));

        let res = TestClient::get("http://example.com/appliances/name?name=Nothing")
            .send(&make_service(consumptions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_lookup_without_name_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/appliances/name")
            .send(&make_service(MockConsumptionsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
