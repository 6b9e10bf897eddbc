use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::auth::Authenticated;
use crate::error::AppError;
use crate::AppState;

/// `DELETE /participants/:id`.
///
/// Removal does not cascade into the current assignment set; an assignment
/// whose receiver is gone surfaces as not-found at `GET /draw/mine`.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    _caller: Authenticated,
) -> Result<StatusCode, AppError> {
    let mut santa = state.santa()?;
    santa.registry.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
