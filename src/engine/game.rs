//! Game state engine.

use tracing::{debug, info};

use crate::core::{math, Candidates, GameRng, Outcome, RoundState, StarError, STAR_CONFIG};

/// What a submitted selection did to the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The selection does not hit the target yet; it replaced the old one.
    Pending,
    /// The selection hit the target and was removed; a new target was drawn.
    Matched { removed: Candidates, next_target: u32 },
    /// The selection hit the target and emptied the board.
    Cleared { removed: Candidates },
}

/// Owns one round's state and the RNG that draws its targets.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: RoundState,
    rng: GameRng,
}

impl GameEngine {
    /// Deal a fresh round with a random target in the board range.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let target = math::random_int(&mut rng, STAR_CONFIG.min_number, STAR_CONFIG.max_number);
        Self::from_state(RoundState::initial(target), rng)
    }

    /// Resume from an explicit state.
    #[must_use]
    pub fn from_state(state: RoundState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Replace the selection, resolving it if it sums to the target.
    ///
    /// On a match the selected numbers leave the board. If any remain, a new
    /// target is drawn from their achievable sums; otherwise the board is
    /// cleared and the stale target is left alone.
    ///
    /// Invalid selections are rejected without touching the state.
    pub fn submit_candidates(&mut self, candidates: &[u32]) -> Result<Transition, StarError> {
        self.state.check_candidates(candidates)?;

        if math::sum(candidates) != self.state.target() {
            self.state.set_candidates(candidates);
            debug!(?candidates, target = self.state.target(), "Selection pending");
            return Ok(Transition::Pending);
        }

        let removed = Candidates::from_slice(candidates);
        self.state.remove_matched(candidates);

        if self.state.available().is_empty() {
            info!(?removed, "Board cleared");
            return Ok(Transition::Cleared { removed });
        }

        let pool: Vec<u32> = self.state.available().iter().copied().collect();
        let next_target = math::random_achievable_sum(&mut self.rng, &pool, STAR_CONFIG.target_ceiling);
        self.state.set_target(next_target);
        debug!(?removed, next_target, remaining = pool.len(), "Target matched");

        Ok(Transition::Matched { removed, next_target })
    }

    /// Count down one second while the round is active.
    ///
    /// Returns false, without changing anything, once the round is over.
    pub fn tick(&mut self) -> bool {
        if self.outcome().is_over() {
            return false;
        }
        self.state.decrement_clock();
        debug!(seconds_remaining = self.state.seconds_remaining(), "Tick");
        true
    }
}
