//! JSON extractor whose rejection is an [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that fails to decode is answered with the
/// shared `ErrorResponse` JSON instead of axum's plain-text rejection.
///
/// Syntax and data errors are `400`. A missing `Content-Type` stays `415`.
/// `T` may be an `Option`, so a literal `null` body reaches the handler as
/// `None`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
