//! Round controller.
//!
//! Combines a [`GameEngine`](crate::engine::GameEngine) with its countdown and
//! derives what the player sees:
//! - outcome (active, won, lost)
//! - per-number status, including the overshoot warning
//! - the selection toggle driven by clicks

mod controller;
mod countdown;

pub use controller::{Round, RoundId, RoundView, Selection};
pub use countdown::Countdown;
