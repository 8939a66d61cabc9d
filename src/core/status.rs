//! Derived round outcome and per-number status.
//!
//! Neither is ever stored: both are recomputed from the round state on every
//! render.

use serde::{Deserialize, Serialize};

/// Result of a round, or `Active` while it is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Numbers remain and time remains.
    Active,
    /// Every number was matched.
    Won,
    /// The clock ran out with numbers left.
    Lost,
}

impl Outcome {
    /// Check if the round has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::Active
    }

    /// End-of-round message, or `None` while the round is active.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Active => None,
            Outcome::Won => Some("You won!"),
            Outcome::Lost => Some("Game Over"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Active => "active",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// How a board number is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberStatus {
    /// Still in play and not selected.
    Available,
    /// Already matched and removed.
    Used,
    /// Selected while the selection overshoots the target.
    Wrong,
    /// Selected.
    Candidate,
}

impl NumberStatus {
    /// Check if the number is part of the current selection.
    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, NumberStatus::Candidate | NumberStatus::Wrong)
    }
}
