use axum::extract::State;
use axum::Json;
use secret_santa_registry::models::Participant;

use crate::auth::Authenticated;
use crate::error::AppError;
use crate::AppState;

/// `GET /participants`: all participants in registration order.
pub async fn list(
    State(state): State<AppState>,
    _caller: Authenticated,
) -> Result<Json<Vec<Participant>>, AppError> {
    let santa = state.santa()?;
    Ok(Json(santa.registry.participants().to_vec()))
}
