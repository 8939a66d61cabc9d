//! Core game types: configuration, RNG, arithmetic, round state, errors.
//!
//! Everything here is independent of the terminal front end.

pub mod config;
pub mod error;
pub mod math;
pub mod rng;
pub mod state;
pub mod status;

pub use config::{Palette, Rgb, StarConfig, BOARD_SIZE, STAR_CONFIG};
pub use error::StarError;
pub use rng::GameRng;
pub use state::{Candidates, RoundState};
pub use status::{NumberStatus, Outcome};
