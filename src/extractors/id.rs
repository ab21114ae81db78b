//! Extract a numeric record id from the last path segment.

use crate::error::AppError;
use crate::model::DbId;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Record id from the path. Anything other than a run of ASCII digits is a 404,
/// matching a router that only accepts `[0-9]+` there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub DbId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("missing id".into()))?;
        parse_id(&raw).map(RecordId)
    }
}

pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("invalid id '{raw}'")));
    }
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("invalid id '{raw}'")))
}
