use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::HttpError;

/// Numeric `{id}` path segment.
///
/// Unlike `Path<i64>`, a malformed id is reported through [`HttpError`] so it
/// gets the same JSON body as every other failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        raw.parse::<i64>()
            .map(Id)
            .map_err(|_| HttpError::BadRequest(format!("Invalid id: {raw}")))
    }
}
