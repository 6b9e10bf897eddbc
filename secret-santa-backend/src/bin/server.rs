use secret_santa_backend::error::AppError;
use secret_santa_backend::run_server;
use secret_santa_config::get_config;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = get_config()?;
    run_server(config).await
}
