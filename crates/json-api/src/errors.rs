//! API error type shared by every handler.

use salvo::{
    async_trait,
    http::StatusCode,
    oapi::{self, EndpointOutRegister},
    prelude::*,
    writing::Json,
};
use serde::Serialize;
use tracing::error;

use orderdesk_app::{domain::ServiceError, validate::FieldErrors};

/// Error detail body, DRF style.
#[derive(Debug, Serialize)]
struct Detail {
    detail: &'static str,
}

/// A request that could not be served. Validation failures render the
/// per-field message map as the 400 body; nothing else leaks internals.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// 400 with a field-name → messages body.
    Validation(FieldErrors),

    /// 400 with a detail body, for unparseable request payloads.
    Malformed(&'static str),

    /// 404 with a detail body.
    NotFound,

    /// 500 with a detail body; the cause is logged, not returned.
    Internal,
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::NotFound => Self::NotFound,
            ServiceError::Sql(source) => {
                error!("storage error: {source}");

                Self::Internal
            }
        }
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        match self {
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(errors.into_map()));
            }
            Self::Malformed(detail) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(Detail { detail }));
            }
            Self::NotFound => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Json(Detail {
                    detail: "Not found.",
                }));
            }
            Self::Internal => {
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                res.render(Json(Detail {
                    detail: "Internal server error.",
                }));
            }
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut oapi::Components, operation: &mut oapi::Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Validation error, body maps field name to messages"),
        );
        operation
            .responses
            .insert(StatusCode::NOT_FOUND.as_str(), oapi::Response::new("Not found"));
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal server error"),
        );
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use orderdesk_app::validate::INVALID_EMAIL;

    use super::*;

    #[handler]
    async fn invalid_email() -> Result<(), ApiError> {
        Err(ApiError::Validation(FieldErrors::single("email", INVALID_EMAIL)))
    }

    #[handler]
    async fn missing() -> Result<(), ApiError> {
        Err(ApiError::NotFound)
    }

    #[tokio::test]
    async fn validation_renders_the_field_map() -> TestResult {
        let service = Service::new(Router::with_path("fail").get(invalid_email));

        let mut res = TestClient::get("http://example.com/fail").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body, serde_json::json!({ "email": [INVALID_EMAIL] }));

        Ok(())
    }

    #[tokio::test]
    async fn not_found_renders_a_detail_body() -> TestResult {
        let service = Service::new(Router::with_path("fail").get(missing));

        let mut res = TestClient::get("http://example.com/fail").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body, serde_json::json!({ "detail": "Not found." }));

        Ok(())
    }
}
