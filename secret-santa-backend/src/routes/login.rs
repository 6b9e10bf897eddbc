use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /login`: exchange an email for a bearer credential.
///
/// When several participants registered the same email the earliest
/// registration wins; uniqueness is intentionally not enforced.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    let (id, email) = {
        let santa = state.santa()?;
        let participant = santa
            .registry
            .find_by_email(&payload.email)
            .ok_or(AppError::ParticipantNotFound)?;
        (participant.id, participant.email.clone())
    };

    let token = state.issuer().issue(id, &email)?;
    Ok(Json(LoginResponse { token }))
}
