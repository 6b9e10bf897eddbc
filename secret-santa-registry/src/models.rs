use serde::{Deserialize, Serialize};

/// A registered participant.
///
/// `email` is the login lookup key. Uniqueness is intentionally not
/// enforced; when several participants share an email, login resolves to
/// the earliest registration (see [`crate::ParticipantRegistry::find_by_email`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    pub email: String,
}
