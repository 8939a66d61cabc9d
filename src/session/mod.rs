//! Session controller: a sequence of rounds.
//!
//! "Play Again" never resets a round in place. The session bumps its round
//! identity and builds a brand-new [`Round`] from a fresh fork of its RNG;
//! the old round, countdown included, is dropped.

use std::time::Instant;

use tracing::info;

use crate::core::GameRng;
use crate::round::{Round, RoundId};

/// Owns the current round and the RNG that seeds every round.
#[derive(Debug)]
pub struct Session {
    rng: GameRng,
    next_id: RoundId,
    round: Round,
}

impl Session {
    /// Start a session with its first round dealt at `now`.
    #[must_use]
    pub fn new(mut rng: GameRng, now: Instant) -> Self {
        info!(seed = rng.seed(), "Session started");
        let round = Round::new(1, rng.fork(), now);
        Self { rng, next_id: 2, round }
    }

    /// Round currently in play.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Round currently in play.
    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// Discard the current round and deal a new one under a new identity.
    pub fn start_new_round(&mut self, now: Instant) -> RoundId {
        let id = self.next_id;
        self.next_id += 1;
        info!(previous = self.round.id(), round_id = id, "Play again");
        self.round = Round::new(id, self.rng.fork(), now);
        id
    }
}
