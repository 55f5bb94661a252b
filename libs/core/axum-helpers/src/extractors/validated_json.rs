//! JSON body extractor that validates after deserializing.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the JSON body and runs the payload's `Validate` impl before
/// the handler sees it.
///
/// Malformed JSON surfaces as the JSON-extraction error (code 1003), failed
/// validation as a 400 with per-field details (code 1001). Handlers receive
/// only payloads that passed both.
///
/// ```ignore
/// async fn create_product(
///     ValidatedJson(input): ValidatedJson<CreateProduct>,
/// ) -> ProductResult<Json<Product>> {
///     // input already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
