//! GraphQL HTTP handlers.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use salvo::{prelude::*, writing::Text};

use crate::{errors::ApiError, extensions::*, state::State};

/// Execute a GraphQL request.
///
/// The schema is read-only; mutations are not part of it.
#[handler]
pub(crate) async fn execute(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<async_graphql::Request>()
        .await
        .map_err(|_ignored| ApiError::Malformed("Malformed GraphQL request."))?;

    let response = state.schema.execute(request).await;

    res.render(Json(response));

    Ok(())
}

/// Serve the GraphiQL explorer for interactive use.
#[handler]
pub(crate) async fn graphiql(res: &mut Response) {
    res.render(Text::Html(
        GraphiQLSource::build().endpoint("/graphql").finish(),
    ));
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use orderdesk_app::domain::customers::{MockCustomersService, records::CustomerId};

    use crate::{
        graphql,
        state::State,
        test_helpers::{app_with_customers, make_customer},
    };

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        let state = State::from_app_context(app_with_customers(customers));

        Service::new(Router::new().hoop(inject(state)).push(graphql::routes()))
    }

    #[tokio::test]
    async fn test_post_executes_a_query() -> TestResult {
        let id = CustomerId::new();

        let mut customers = MockCustomersService::new();

        customers
            .expect_search_customers()
            .once()
            .return_once(move |_, _| Ok(vec![make_customer(id)]));

        let mut res = TestClient::post("http://example.com/graphql")
            .json(&json!({ "query": "{ customers { name email } }" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"]["customers"][0]["email"], "zoe@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_post_with_a_malformed_body_returns_400() -> TestResult {
        let customers = MockCustomersService::new();

        let res = TestClient::post("http://example.com/graphql")
            .text("not json")
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() -> TestResult {
        let customers = MockCustomersService::new();

        let mut res = TestClient::get("http://example.com/graphql")
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains("graphiql"), "expected the GraphiQL page");

        Ok(())
    }
}
