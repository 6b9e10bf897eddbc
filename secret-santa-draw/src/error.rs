use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrawError {
    #[error("a draw needs at least 3 participants, got {have}")]
    InsufficientParticipants { have: usize },
}
