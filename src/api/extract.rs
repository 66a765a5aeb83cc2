use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::api::errors::ApiError;

/// JSON request body extractor for write routes
///
/// Rejections (missing content type, malformed JSON) are reported as
/// `ApiError`, so clients always get a `{ "message": … }` body.
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                ApiError::internal_server_error(rejection.body_text())
            })?;

        Ok(JsonBody(value))
    }
}
