use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("credential expired")]
    Expired,
    #[error("invalid credential: {0}")]
    Invalid(jsonwebtoken::errors::Error),
    #[error("signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("system clock is before the unix epoch")]
    Clock,
}
