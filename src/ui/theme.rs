//! Terminal colours and styles for the game screen.

use ratatui::style::{Color, Modifier, Style};

use crate::core::{NumberStatus, Outcome, Rgb, STAR_CONFIG};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub const STAR_GLYPH: &str = "★";

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn star() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Button style: palette colour as background, dark label.
pub fn button(status: NumberStatus) -> Style {
    Style::default()
        .bg(STAR_CONFIG.palette.colour(status).into())
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// End-of-round message style. Plain while the round is active.
pub fn message(outcome: Outcome) -> Style {
    let colour = match outcome {
        Outcome::Active => return Style::default(),
        Outcome::Won => STAR_CONFIG.palette.won,
        Outcome::Lost => STAR_CONFIG.palette.lost,
    };
    Style::default().fg(colour.into()).add_modifier(Modifier::BOLD)
}

pub fn play_again() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn timer() -> Style {
    Style::default().fg(Color::Gray)
}
