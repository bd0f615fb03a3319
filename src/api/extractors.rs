use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::models::Action;

/// Extractor for the `:action` path segment.
///
/// Unknown action names are rejected with the unknown-button warning before
/// the handler runs, so no request is ever issued for them.
pub struct ActionPath(pub Action);

#[async_trait]
impl<S> FromRequestParts<S> for ActionPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let raw = params
            .get("action")
            .ok_or_else(|| AppError::BadRequest("Missing action".to_string()))?;

        let action = raw.parse::<Action>().map_err(|warning| {
            tracing::warn!("Rejected action: {}", warning);
            AppError::from(warning)
        })?;
        Ok(ActionPath(action))
    }
}
