pub mod auth;
pub mod error;
pub mod routes;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::routing::{delete, get, post, put};
use axum::Router;
use error::AppError;
use secret_santa_config::Config;
use secret_santa_draw::AssignmentEngine;
use secret_santa_registry::ParticipantRegistry;
use secret_santa_session::SessionIssuer;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::login::login;
use crate::routes::{draw, participants};

/// Single source of truth for the current participants and the current
/// draw. Registry and engine sit behind the same lock so a draw observes a
/// consistent snapshot of the id set: no registration or removal can
/// interleave a running draw, and draws are mutually exclusive.
#[derive(Default)]
pub struct SantaState {
    pub registry: ParticipantRegistry,
    pub engine: AssignmentEngine,
}

#[derive(Clone)]
pub struct AppState {
    santa: Arc<Mutex<SantaState>>,
    issuer: Arc<SessionIssuer>,
}

impl AppState {
    /// Fresh empty state. Constructed once at startup and injected into
    /// every handler; nothing survives a process restart.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            santa: Arc::new(Mutex::new(SantaState::default())),
            issuer: Arc::new(SessionIssuer::from_config(config)),
        }
    }

    /// Serialized access to registry and engine.
    pub fn santa(&self) -> Result<MutexGuard<'_, SantaState>, AppError> {
        self.santa.lock().map_err(|_| AppError::StatePoisoned)
    }

    #[must_use]
    pub fn issuer(&self) -> &SessionIssuer {
        &self.issuer
    }
}

#[must_use]
pub fn setup_router(state: AppState) -> Router {
    Router::new()
        .route("/participants", post(participants::create::create))
        .route("/participants", get(participants::list::list))
        .route("/participants/:id", put(participants::update::update))
        .route("/participants/:id", delete(participants::remove::remove))
        .route("/login", post(login))
        .route("/draw", post(draw::run::run))
        .route("/draw/mine", get(draw::mine::mine))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

pub async fn run_server(config: Config) -> Result<(), AppError> {
    info!("starting up server...");

    let state = AppState::new(&config);
    let app = setup_router(state);

    let listener = TcpListener::bind(&config.address).await?;
    info!("listening on {}", config.address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[allow(clippy::redundant_pub_crate)]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
