use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use secret_santa_session::SessionClaims;

use crate::error::AppError;
use crate::AppState;

/// Verified caller identity, reconstructed from the `Authorization: Bearer`
/// header on every request. The embedded participant id is trusted as the
/// caller's identity without further checks.
pub struct Authenticated(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthenticated)?;
        let claims = state.issuer().verify(bearer.token())?;
        Ok(Self(claims))
    }
}
