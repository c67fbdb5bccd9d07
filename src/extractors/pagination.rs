//! Extract `offset` / `limit` from the query string for list endpoints.

use crate::error::{AppError, FieldError};
use crate::service::{parse_int, DEFAULT_LIMIT, MAX_LIMIT};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use utoipa::IntoParams;

/// Validated page window: `offset >= 0`, `0 <= limit <= 100`. Out-of-range values are rejected, not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Rows to skip, in id order.
    #[param(default = 0, minimum = 0)]
    pub offset: i64,
    /// Maximum rows to return.
    #[param(default = 100, minimum = 0, maximum = 100)]
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut page = Pagination::default();
        let mut errors = Vec::new();

        if let Some(raw) = params.get("offset") {
            match parse_int(&["query", "offset"], raw) {
                Ok(n) if n < 0 => errors.push(FieldError::new(
                    &["query", "offset"],
                    "Input should be greater than or equal to 0",
                    "greater_than_equal",
                )),
                Ok(n) => page.offset = n,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = params.get("limit") {
            match parse_int(&["query", "limit"], raw) {
                Ok(n) if n > MAX_LIMIT => errors.push(FieldError::new(
                    &["query", "limit"],
                    format!("Input should be less than or equal to {}", MAX_LIMIT),
                    "less_than_equal",
                )),
                Ok(n) if n < 0 => errors.push(FieldError::new(
                    &["query", "limit"],
                    "Input should be greater than or equal to 0",
                    "greater_than_equal",
                )),
                Ok(n) => page.limit = n,
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(page)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::invalid(&["query"], e.body_text(), "query_invalid"))?;
        Pagination::from_params(&params)
    }
}
