use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::Authenticated;
use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct DrawResponse {
    /// How many participants the fresh assignment set covers.
    pub participants: usize,
}

/// `POST /draw`: replace the current assignment set with a fresh
/// derangement over the ids registered right now.
///
/// The state lock is held for the whole draw, so the id set cannot change
/// mid-draw and two draws cannot overlap.
pub async fn run(
    State(state): State<AppState>,
    _caller: Authenticated,
) -> Result<Json<DrawResponse>, AppError> {
    let mut santa = state.santa()?;
    let ids = santa.registry.ids();
    let assignments = santa.engine.draw(&mut rand::thread_rng(), &ids)?;
    let participants = assignments.len();
    Ok(Json(DrawResponse { participants }))
}
