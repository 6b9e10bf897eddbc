use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use secret_santa_config::ConfigError;
use secret_santa_draw::error::DrawError;
use secret_santa_registry::error::RegistryError;
use secret_santa_session::error::SessionError;
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("participant not found")]
    ParticipantNotFound,
    #[error("no draw has been run")]
    DrawNotRun,
    #[error("credential required")]
    Unauthenticated,
    #[error("{0}")]
    Registry(#[from] RegistryError),
    #[error("{0}")]
    Draw(#[from] DrawError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("shared state poisoned by an earlier panic")]
    StatePoisoned,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ParticipantNotFound | Self::DrawNotRun | Self::Registry(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Draw(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Session(SessionError::Expired | SessionError::Invalid(_)) => {
                StatusCode::FORBIDDEN
            }
            Self::Session(_) | Self::Config(_) | Self::Io(_) | Self::StatePoisoned => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
