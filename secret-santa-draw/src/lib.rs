pub mod error;

use std::collections::BTreeMap;

use error::DrawError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Hard precondition for a draw. With two participants the only
/// derangement is a forced swap, so both would know their giver.
pub const MIN_PARTICIPANTS: usize = 3;

/// Owns the single current assignment set: giver id → receiver id.
///
/// The set is replaced wholesale by each successful draw and survives
/// participant removal unchanged; an entry whose receiver no longer exists
/// stops resolving at lookup time.
#[derive(Debug, Default)]
pub struct AssignmentEngine {
    assignments: BTreeMap<u64, u64>,
}

impl AssignmentEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current assignment set with a fresh derangement of
    /// `ids`: every id gives to exactly one other id, nobody to themselves,
    /// every id receives exactly once.
    ///
    /// Fails without touching the current set when fewer than
    /// [`MIN_PARTICIPANTS`] ids are supplied.
    pub fn draw<R: Rng>(
        &mut self,
        rng: &mut R,
        ids: &[u64],
    ) -> Result<&BTreeMap<u64, u64>, DrawError> {
        if ids.len() < MIN_PARTICIPANTS {
            return Err(DrawError::InsufficientParticipants { have: ids.len() });
        }
        let mut receivers = ids.to_vec();
        // A shuffled copy is a uniform permutation; rejecting every shuffle
        // with a fixed point leaves a uniform derangement. The accepting
        // fraction tends to 1/e, so the retry count stays bounded.
        loop {
            receivers.shuffle(rng);
            if ids
                .iter()
                .zip(&receivers)
                .all(|(giver, receiver)| giver != receiver)
            {
                break;
            }
        }
        self.assignments = ids.iter().copied().zip(receivers).collect();
        Ok(&self.assignments)
    }

    /// Receiver assigned to `giver` by the last draw. `None` before any
    /// draw or when the giver was not part of it.
    #[must_use]
    pub fn assignment_for(&self, giver: u64) -> Option<u64> {
        self.assignments.get(&giver).copied()
    }

    #[must_use]
    pub fn assignments(&self) -> &BTreeMap<u64, u64> {
        &self.assignments
    }

    #[must_use]
    pub fn has_drawn(&self) -> bool {
        !self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn assert_derangement(ids: &[u64], assignments: &BTreeMap<u64, u64>) {
        assert_eq!(assignments.len(), ids.len());
        for id in ids {
            let receiver = assignments[id];
            assert_ne!(receiver, *id, "{id} was assigned to itself");
            assert!(ids.contains(&receiver));
        }
        let mut receivers: Vec<u64> = assignments.values().copied().collect();
        receivers.sort_unstable();
        let mut givers = ids.to_vec();
        givers.sort_unstable();
        assert_eq!(receivers, givers, "receivers are not a permutation of givers");
    }

    #[test]
    fn draw_produces_a_derangement_for_all_small_sizes() {
        for size in 3..=12_u64 {
            let ids: Vec<u64> = (1..=size).collect();
            for seed in 0..20 {
                let mut engine = AssignmentEngine::new();
                let mut rng = StdRng::seed_from_u64(seed);
                let assignments = engine.draw(&mut rng, &ids).unwrap().clone();
                assert_derangement(&ids, &assignments);
            }
        }
    }

    #[test]
    fn draw_with_three_participants() {
        let mut engine = AssignmentEngine::new();
        let mut rng = StdRng::seed_from_u64(42);
        let assignments = engine.draw(&mut rng, &[1, 2, 3]).unwrap();
        assert_eq!(assignments.len(), 3);
        assert_derangement(&[1, 2, 3], assignments);
    }

    #[test]
    fn draw_below_minimum_fails_and_keeps_prior_set() {
        let mut engine = AssignmentEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        let before = engine.draw(&mut rng, &[1, 2, 3]).unwrap().clone();

        assert_eq!(
            engine.draw(&mut rng, &[1, 2]),
            Err(DrawError::InsufficientParticipants { have: 2 })
        );
        assert_eq!(engine.assignments(), &before);

        assert_eq!(
            engine.draw(&mut rng, &[]),
            Err(DrawError::InsufficientParticipants { have: 0 })
        );
        assert_eq!(engine.assignments(), &before);
    }

    #[test]
    fn draw_below_minimum_on_fresh_engine_leaves_it_empty() {
        let mut engine = AssignmentEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(engine.draw(&mut rng, &[1, 2]).is_err());
        assert!(!engine.has_drawn());
        assert_eq!(engine.assignment_for(1), None);
    }

    #[test]
    fn assignment_for_answers_from_the_last_draw_only() {
        let mut engine = AssignmentEngine::new();
        let mut rng = StdRng::seed_from_u64(13);

        assert_eq!(engine.assignment_for(1), None);

        engine.draw(&mut rng, &[1, 2, 3, 4]).unwrap();
        let receiver = engine.assignment_for(4).unwrap();
        assert!([1, 2, 3].contains(&receiver));

        // 4 left before the second draw; its entry is replaced wholesale.
        engine.draw(&mut rng, &[1, 2, 3]).unwrap();
        assert_eq!(engine.assignment_for(4), None);
        assert!(engine.assignment_for(1).is_some());
    }

    #[test]
    fn draw_handles_non_contiguous_ids() {
        let ids = [2, 5, 11, 17];
        let mut engine = AssignmentEngine::new();
        let mut rng = StdRng::seed_from_u64(99);
        let assignments = engine.draw(&mut rng, &ids).unwrap().clone();
        assert_derangement(&ids, &assignments);
    }
}
