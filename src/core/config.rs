//! Fixed game parameters.
//!
//! The game is not configurable at runtime: [`STAR_CONFIG`] is a single
//! read-only table shared by the engine, the round timer and the renderer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::math;
use super::status::NumberStatus;

/// An sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const LIGHT_GRAY: Rgb = Rgb(0xD3, 0xD3, 0xD3);
    pub const LIGHT_GREEN: Rgb = Rgb(0x90, 0xEE, 0x90);
    pub const LIGHT_CORAL: Rgb = Rgb(0xF0, 0x80, 0x80);
    pub const DEEP_SKY_BLUE: Rgb = Rgb(0x00, 0xBF, 0xFF);
    pub const RED: Rgb = Rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb(0x00, 0x80, 0x00);
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Button colour for each number status, plus end-of-round message colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub available: Rgb,
    pub used: Rgb,
    pub wrong: Rgb,
    pub candidate: Rgb,
    pub lost: Rgb,
    pub won: Rgb,
}

impl Palette {
    /// Colour of a number button in the given status.
    #[must_use]
    pub const fn colour(&self, status: NumberStatus) -> Rgb {
        match status {
            NumberStatus::Available => self.available,
            NumberStatus::Used => self.used,
            NumberStatus::Wrong => self.wrong,
            NumberStatus::Candidate => self.candidate,
        }
    }
}

/// Game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarConfig {
    /// Smallest number on the board.
    pub min_number: u32,

    /// Largest number on the board.
    pub max_number: u32,

    /// Upper bound for every target drawn after a match.
    pub target_ceiling: u32,

    /// Seconds on the clock when a round starts.
    pub round_seconds: u32,

    /// Wall-clock time per countdown step.
    pub tick: Duration,

    pub palette: Palette,
}

impl StarConfig {
    /// Number of buttons on the board.
    #[must_use]
    pub const fn board_size(&self) -> usize {
        (self.max_number - self.min_number + 1) as usize
    }

    /// Check if `n` is one of the board numbers.
    #[must_use]
    pub const fn is_board_number(&self, n: u32) -> bool {
        n >= self.min_number && n <= self.max_number
    }

    /// Board numbers in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> {
        math::range(self.min_number, self.max_number).into_iter()
    }
}

/// The game's only configuration.
pub const STAR_CONFIG: StarConfig = StarConfig {
    min_number: 1,
    max_number: 9,
    target_ceiling: 9,
    round_seconds: 10,
    tick: Duration::from_secs(1),
    palette: Palette {
        available: Rgb::LIGHT_GRAY,
        used: Rgb::LIGHT_GREEN,
        wrong: Rgb::LIGHT_CORAL,
        candidate: Rgb::DEEP_SKY_BLUE,
        lost: Rgb::RED,
        won: Rgb::GREEN,
    },
};

/// Number of buttons on the board.
pub const BOARD_SIZE: usize = STAR_CONFIG.board_size();
