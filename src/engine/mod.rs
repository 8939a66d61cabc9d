//! Game state engine.
//!
//! The engine holds one round's state and exposes exactly two mutations:
//! - `submit_candidates`: the player's selection changed
//! - `tick`: one second elapsed
//!
//! Everything else (outcome, number status) is derived from the state.

mod game;

pub use game::{GameEngine, Transition};
