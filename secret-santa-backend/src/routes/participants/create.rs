use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: u64,
}

/// `POST /participants`: register a new participant.
///
/// Registration is open to the world; the returned id is what the
/// credential from `POST /login` later binds the caller to.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<RegisterResponse>, AppError> {
    let mut santa = state.santa()?;
    let id = santa.registry.register(payload.name, payload.email);
    Ok(Json(RegisterResponse { id }))
}
