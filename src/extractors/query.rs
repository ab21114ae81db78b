//! Query-string reader with defaults and integer validation.

use crate::error::AppError;
use crate::service::Validator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Debug, Default)]
pub struct QueryValues(HashMap<String, String>);

impl QueryValues {
    /// Value for `key`, or `default` when absent or empty.
    pub fn read_string(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(s) if !s.is_empty() => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Integer value for `key`, or `default` when absent or empty. An unparseable
    /// value records "must be an integer value" on `v` and yields `default`.
    pub fn read_int<T: FromStr>(&self, key: &str, default: T, v: &mut Validator) -> T {
        match self.0.get(key) {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(n) => n,
                Err(_) => {
                    v.add_error(key, "must be an integer value");
                    default
                }
            },
            _ => default,
        }
    }
}

impl From<HashMap<String, String>> for QueryValues {
    fn from(map: HashMap<String, String>) -> Self {
        QueryValues(map)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryValues
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(map) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(QueryValues(map))
    }
}
