use axum::extract::State;
use axum::Json;
use secret_santa_registry::models::Participant;
use serde::Serialize;

use crate::auth::Authenticated;
use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct MyAssignment {
    pub receiver: Participant,
}

/// `GET /draw/mine`: who the caller gifts.
///
/// Not found when no draw has been run, the caller was not part of the
/// last one, or the assigned receiver has been removed since.
pub async fn mine(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
) -> Result<Json<MyAssignment>, AppError> {
    let santa = state.santa()?;
    let receiver_id = santa
        .engine
        .assignment_for(claims.sub)
        .ok_or(AppError::DrawNotRun)?;
    let receiver = santa
        .registry
        .find_by_id(receiver_id)
        .ok_or(AppError::ParticipantNotFound)?
        .clone();
    Ok(Json(MyAssignment { receiver }))
}
