use crate::shared::errors::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

/// Authenticated principal for mutation routes.
///
/// Session handling lives in the reverse proxy in front of this service;
/// it forwards the resolved user id in `x-user-id`. A missing or garbled
/// header means the request never passed authentication.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Login required.".to_string()))?;

        let user_id = Uuid::parse_str(header)
            .map_err(|_| AppError::Unauthorized("Login required.".to_string()))?;

        Ok(CurrentUser(user_id))
    }
}
