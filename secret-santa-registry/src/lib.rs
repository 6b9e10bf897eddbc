pub mod error;
pub mod models;

use error::RegistryError;
use models::Participant;

/// In-memory participant store in registration order.
///
/// Ids come from a counter that only ever increases, so removing a
/// participant never frees its id for a later registration.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    next_id: u64,
}

impl ParticipantRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new participant and returns its freshly allocated id.
    pub fn register(&mut self, name: String, email: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.participants.push(Participant { id, name, email });
        id
    }

    /// First registration wins when several participants share an email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.email == email)
    }

    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.id == id)
    }

    /// Partial update. A field is kept when its replacement is absent or
    /// empty.
    pub fn update(
        &mut self,
        id: u64,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<&Participant, RegistryError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|participant| participant.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            participant.name = name;
        }
        if let Some(email) = email.filter(|email| !email.is_empty()) {
            participant.email = email;
        }
        Ok(participant)
    }

    /// Removes the participant with the given id.
    ///
    /// Does not touch any assignment set a previous draw produced; an entry
    /// referencing the removed id simply stops resolving to a participant.
    pub fn remove(&mut self, id: u64) -> Result<Participant, RegistryError> {
        let index = self
            .participants
            .iter()
            .position(|participant| participant.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.participants.remove(index))
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The current id set in registration order, the input of a draw.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.participants
            .iter()
            .map(|participant| participant.id)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
