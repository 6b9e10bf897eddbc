use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no participant with id {0}")]
    NotFound(u64),
}
