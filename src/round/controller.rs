//! One playable round: engine, countdown and derived display state.

use std::time::Instant;

use tracing::{debug, info};

use super::countdown::Countdown;
use crate::core::{math, GameRng, NumberStatus, Outcome, StarError, BOARD_SIZE, STAR_CONFIG};
use crate::engine::{GameEngine, Transition};

/// Identity of a round within a session. Strictly increasing.
pub type RoundId = u64;

/// Result of a number selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Used number, or no time left.
    Ignored,
    /// The toggled selection was handed to the engine.
    Applied(Transition),
}

/// Everything the renderer needs, recomputed after every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundView {
    pub round_id: RoundId,
    pub target: u32,
    /// Status of each board number, ascending.
    pub statuses: [NumberStatus; BOARD_SIZE],
    pub outcome: Outcome,
    pub seconds_remaining: u32,
}

impl RoundView {
    /// Status of board number `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a board number.
    #[must_use]
    pub fn status(&self, n: u32) -> NumberStatus {
        assert!(STAR_CONFIG.is_board_number(n), "{n} is not a board number");
        self.statuses[(n - STAR_CONFIG.min_number) as usize]
    }
}

/// A round in play.
///
/// Dropping a `Round` drops its countdown, so a replaced round can never be
/// ticked again.
#[derive(Debug)]
pub struct Round {
    id: RoundId,
    engine: GameEngine,
    countdown: Countdown,
}

impl Round {
    /// Deal a fresh round and start its clock at `now`.
    #[must_use]
    pub fn new(id: RoundId, rng: GameRng, now: Instant) -> Self {
        let seed = rng.seed();
        let round = Self::from_engine(id, GameEngine::new(rng), now);
        info!(round_id = id, seed, target = round.engine.state().target(), "Round started");
        round
    }

    /// Wrap an existing engine. The clock only runs if the round is active.
    #[must_use]
    pub fn from_engine(id: RoundId, engine: GameEngine, now: Instant) -> Self {
        let mut countdown = Countdown::start(now, STAR_CONFIG.tick);
        if engine.outcome().is_over() {
            countdown.cancel();
        }
        Self { id, engine, countdown }
    }

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    // === Derived state ===

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    /// The selection overshoots the target. Purely a warning: selecting more
    /// is still allowed.
    #[must_use]
    pub fn candidates_exceed_target(&self) -> bool {
        let state = self.engine.state();
        math::sum(state.candidates()) > state.target()
    }

    /// Display status of number `n`.
    #[must_use]
    pub fn status_of(&self, n: u32) -> NumberStatus {
        let state = self.engine.state();
        if !state.is_available(n) {
            NumberStatus::Used
        } else if state.is_candidate(n) {
            if self.candidates_exceed_target() {
                NumberStatus::Wrong
            } else {
                NumberStatus::Candidate
            }
        } else {
            NumberStatus::Available
        }
    }

    /// Status of every board number, ascending.
    #[must_use]
    pub fn statuses(&self) -> [NumberStatus; BOARD_SIZE] {
        std::array::from_fn(|i| self.status_of(STAR_CONFIG.min_number + i as u32))
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        let state = self.engine.state();
        RoundView {
            round_id: self.id,
            target: state.target(),
            statuses: self.statuses(),
            outcome: self.outcome(),
            seconds_remaining: state.seconds_remaining(),
        }
    }

    // === Interaction ===

    /// Toggle `n` in the selection given the status it was displayed with.
    ///
    /// Used numbers and an expired clock are ignored. An available number is
    /// appended to the selection; a selected one is removed.
    pub fn on_number_selected(&mut self, n: u32, status: NumberStatus) -> Result<Selection, StarError> {
        if !STAR_CONFIG.is_board_number(n) {
            return Err(StarError::NumberOutOfRange(n));
        }
        if status == NumberStatus::Used || self.engine.state().seconds_remaining() == 0 {
            debug!(round_id = self.id, n, ?status, "Selection ignored");
            return Ok(Selection::Ignored);
        }

        let current = self.engine.state().candidates();
        let next: Vec<u32> = if status.is_selected() {
            current.iter().copied().filter(|&c| c != n).collect()
        } else {
            current.iter().copied().chain(std::iter::once(n)).collect()
        };

        let transition = self.engine.submit_candidates(&next)?;
        if let Transition::Cleared { .. } = transition {
            self.countdown.cancel();
            info!(round_id = self.id, outcome = %self.outcome(), "Round over");
        }
        Ok(Selection::Applied(transition))
    }

    /// Select `n` using its current status.
    pub fn select(&mut self, n: u32) -> Result<Selection, StarError> {
        let status = self.status_of(n);
        self.on_number_selected(n, status)
    }

    // === Clock ===

    /// Apply every tick whose deadline has passed by `now`.
    ///
    /// Returns the number of ticks applied. The countdown is cancelled as soon
    /// as the round stops being active.
    pub fn advance_clock(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while self.countdown.take_due(now) {
            if self.engine.tick() {
                ticks += 1;
            }
            if self.outcome().is_over() {
                self.countdown.cancel();
                info!(round_id = self.id, outcome = %self.outcome(), "Round over");
            }
        }
        ticks
    }
}
