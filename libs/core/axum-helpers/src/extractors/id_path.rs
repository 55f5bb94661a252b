//! Integer id path extractor.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Parses the `{id}` path segment as an `i32`.
///
/// Non-numeric segments short-circuit with a 400 carrying the INVALID_ID
/// code, so handlers only ever see well-formed ids.
///
/// ```ignore
/// async fn get_product(IdPath(id): IdPath) -> ProductResult<Json<Product>> {
///     // id is a valid i32 here
/// }
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<i32>().map(IdPath).map_err(|_| {
            let body = Json(ErrorResponse::new(
                ErrorCode::InvalidId,
                format!("Invalid id: '{}'", raw),
            ));
            (StatusCode::BAD_REQUEST, body).into_response()
        })
    }
}
