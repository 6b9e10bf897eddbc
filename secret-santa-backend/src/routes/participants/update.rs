use axum::extract::{Path, State};
use axum::Json;
use secret_santa_registry::models::Participant;
use serde::Deserialize;

use crate::auth::Authenticated;
use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdatePayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `PUT /participants/:id`: partial update.
///
/// A field is kept when the payload omits it or supplies an empty string.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    _caller: Authenticated,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<Participant>, AppError> {
    let mut santa = state.santa()?;
    let participant = santa
        .registry
        .update(id, payload.name, payload.email)?
        .clone();
    Ok(Json(participant))
}
