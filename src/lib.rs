//! # star-match
//!
//! A single-player number puzzle for the terminal. A target ("stars") is
//! shown; pick numbers from 1-9 whose sum equals it before the clock runs out.
//! Every match removes those numbers and deals a new target that the remaining
//! numbers can still reach. Clear the board to win.
//!
//! ## Architecture
//!
//! - **Engine owns state**: one `GameEngine` per round holds target,
//!   available numbers, selection and clock. It has two mutations: a new
//!   selection and a one-second tick.
//!
//! - **Derived, never stored**: outcome and per-number status are computed
//!   from the engine state on every frame.
//!
//! - **Replace, don't reset**: "Play Again" drops the round and builds a new
//!   one under a new id, seeded from a fork of the session RNG.
//!
//! ## Modules
//!
//! - `core`: configuration, RNG, arithmetic, round state, errors
//! - `engine`: the game state engine
//! - `round`: round controller and countdown
//! - `session`: sequence of rounds
//! - `ui`: terminal rendering and input

pub mod core;
pub mod engine;
pub mod round;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    GameRng, NumberStatus, Outcome, RoundState, StarConfig, StarError, STAR_CONFIG,
};

pub use crate::engine::{GameEngine, Transition};

pub use crate::round::{Countdown, Round, RoundId, RoundView, Selection};

pub use crate::session::Session;
