//! Weighted draw engine

use rand::prelude::*;

use crate::error::DrawError;
use crate::participant::{DrawResult, Participant};

/// Weighted draft-lottery draw engine
///
/// Selects one winner with probability proportional to weight, then
/// shuffles the remaining field into the elimination order. The engine
/// owns its random stream; inject a seeded or custom generator for
/// reproducible draws.
pub struct DrawEngine<R = StdRng> {
    rng: R,
}

impl DrawEngine<StdRng> {
    /// Create an engine seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DrawEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DrawEngine<R> {
    /// Create an engine over a caller-supplied generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Reseed the random stream
    pub fn seed(&mut self, seed: u64)
    where
        R: SeedableRng,
    {
        self.rng = R::seed_from_u64(seed);
    }

    /// Draw one winner and shuffle the elimination order
    ///
    /// The winner roll and the shuffle consume the stream sequentially, so
    /// the elimination order never reuses the randomness that picked the
    /// winner.
    pub fn draw(&mut self, participants: &[Participant]) -> Result<DrawResult, DrawError> {
        let total = validate(participants)?;

        let roll = self.rng.random_range(0..total);
        // validate() guarantees roll < total, so the walk cannot miss.
        let winner_idx = winner_index(participants, roll).unwrap_or(participants.len() - 1);
        let winner = participants[winner_idx].clone();

        let mut elimination_order: Vec<Participant> = participants
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != winner_idx)
            .map(|(_, p)| p.clone())
            .collect();
        elimination_order.shuffle(&mut self.rng);

        log::debug!(
            "[DrawEngine] winner '{}' (roll {} of {})",
            winner.name,
            roll,
            total
        );

        Ok(DrawResult {
            winner,
            elimination_order,
        })
    }
}

/// Sum the field's weights, rejecting empty fields and zero weights
fn validate(participants: &[Participant]) -> Result<u64, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::NoParticipants);
    }
    let mut total = 0u64;
    for participant in participants {
        if participant.weight == 0 {
            return Err(DrawError::InvalidWeight {
                name: participant.name.clone(),
                weight: participant.weight,
            });
        }
        total += u64::from(participant.weight);
    }
    Ok(total)
}

/// Locate the participant whose weight interval contains `roll`
///
/// Input order partitions `[0, total)` into contiguous half-open intervals,
/// one per participant; order decides interval placement only, never odds.
/// Returns `None` when `roll` lies past the last interval.
pub fn winner_index(participants: &[Participant], roll: u64) -> Option<usize> {
    let mut cumulative = 0u64;
    for (i, participant) in participants.iter().enumerate() {
        cumulative += u64::from(participant.weight);
        if roll < cumulative {
            return Some(i);
        }
    }
    None
}
