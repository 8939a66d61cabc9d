//! Round state: target, numbers in play, selection and clock.
//!
//! ## Invariants
//!
//! - `candidates` is a subset of `available`, without repeats
//! - every number is a board number (see [`STAR_CONFIG`])
//! - `seconds_remaining` never goes below zero
//!
//! The target is only guaranteed achievable while `available` is non-empty;
//! once the board is cleared it is stale and ignored.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::STAR_CONFIG;
use super::error::StarError;
use super::math;
use super::status::Outcome;

/// Selected numbers in click order. Never more than the board holds.
pub type Candidates = SmallVec<[u32; 9]>;

/// One round's mutable state.
///
/// Uses an `im` set for `available` so snapshots handed to the renderer are
/// O(1) clones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    target: u32,
    available: OrdSet<u32>,
    candidates: Candidates,
    seconds_remaining: u32,
}

impl RoundState {
    /// Fresh round: every board number available, nothing selected, full clock.
    #[must_use]
    pub fn initial(target: u32) -> Self {
        Self {
            target,
            available: STAR_CONFIG.numbers().collect(),
            candidates: Candidates::new(),
            seconds_remaining: STAR_CONFIG.round_seconds,
        }
    }

    /// Build an arbitrary state, checking the invariants.
    ///
    /// While numbers remain, `target` must be the sum of some of them and
    /// within the target ceiling.
    pub fn new(
        target: u32,
        available: impl IntoIterator<Item = u32>,
        candidates: &[u32],
        seconds_remaining: u32,
    ) -> Result<Self, StarError> {
        let mut set = OrdSet::new();
        for n in available {
            if !STAR_CONFIG.is_board_number(n) {
                return Err(StarError::NumberOutOfRange(n));
            }
            set.insert(n);
        }

        let state = Self {
            target,
            available: set,
            candidates: Candidates::new(),
            seconds_remaining,
        };
        state.check_candidates(candidates)?;

        let pool: Vec<u32> = state.available.iter().copied().collect();
        let reachable = math::achievable_sums(&pool, STAR_CONFIG.target_ceiling);
        if !pool.is_empty() && !reachable.contains(&target) {
            return Err(StarError::UnreachableTarget(target));
        }

        Ok(Self {
            candidates: Candidates::from_slice(candidates),
            ..state
        })
    }

    /// The sum to match.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Numbers still in play, ascending.
    #[must_use]
    pub fn available(&self) -> &OrdSet<u32> {
        &self.available
    }

    /// Current selection in click order.
    #[must_use]
    pub fn candidates(&self) -> &[u32] {
        &self.candidates
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Check if `n` is still in play.
    #[must_use]
    pub fn is_available(&self, n: u32) -> bool {
        self.available.contains(&n)
    }

    /// Check if `n` is currently selected.
    #[must_use]
    pub fn is_candidate(&self, n: u32) -> bool {
        self.candidates.contains(&n)
    }

    /// Won once the board is empty, lost once the clock hits zero.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.available.is_empty() {
            Outcome::Won
        } else if self.seconds_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::Active
        }
    }

    /// Verify a proposed selection against the invariants.
    pub fn check_candidates(&self, candidates: &[u32]) -> Result<(), StarError> {
        for (i, &n) in candidates.iter().enumerate() {
            if !STAR_CONFIG.is_board_number(n) {
                return Err(StarError::NumberOutOfRange(n));
            }
            if !self.is_available(n) {
                return Err(StarError::NotAvailable(n));
            }
            if candidates[..i].contains(&n) {
                return Err(StarError::DuplicateCandidate(n));
            }
        }
        Ok(())
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_candidates(&mut self, candidates: &[u32]) {
        self.candidates = Candidates::from_slice(candidates);
    }

    pub(crate) fn set_target(&mut self, target: u32) {
        self.target = target;
    }

    /// Remove matched numbers from play and clear the selection.
    pub(crate) fn remove_matched(&mut self, matched: &[u32]) {
        for n in matched {
            self.available.remove(n);
        }
        self.candidates.clear();
    }

    /// Count down one second, floored at zero.
    pub(crate) fn decrement_clock(&mut self) {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
    }
}
