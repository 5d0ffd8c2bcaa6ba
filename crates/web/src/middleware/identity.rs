use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::WebError;

/// The acting user, as supplied by the fronting identity layer.
///
/// Authentication itself lives outside this service; the gateway forwards
/// the verified user id in the `X-User-Id` header and the core treats it
/// as an opaque reference.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

const USER_ID_HEADER: &str = "x-user-id";

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .map(UserId)
            .ok_or(WebError::Unauthorized)
    }
}
