//! Stateless rendering of the game screen.
//!
//! Every function here is a pure function of a [`RoundView`]; the event loop
//! redraws after each mutation.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::GameLayout;
use super::theme;
use crate::core::{NumberStatus, Outcome, STAR_CONFIG};
use crate::round::RoundView;

/// Draw the whole game screen and return the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, view: &RoundView) -> GameLayout {
    let layout = GameLayout::new(frame.area());

    let title = Paragraph::new("The Star Game")
        .style(theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    if view.outcome.is_over() {
        draw_overlay(frame, &layout, view.outcome);
    } else {
        draw_stars(frame, layout.left, view.target);
    }
    draw_grid(frame, &layout, &view.statuses);
    draw_timer(frame, layout.timer, view.seconds_remaining);

    layout
}

/// `count` identical star glyphs.
pub fn draw_stars(frame: &mut Frame, area: Rect, count: u32) {
    let stars: Vec<Span> = (0..count)
        .map(|_| Span::styled(format!("{} ", theme::STAR_GLYPH), theme::star()))
        .collect();

    let paragraph = Paragraph::new(Line::from(stars))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// The nine number buttons, coloured by status.
pub fn draw_grid(frame: &mut Frame, layout: &GameLayout, statuses: &[NumberStatus]) {
    for (n, &status) in STAR_CONFIG.numbers().zip(statuses) {
        let Some(area) = layout.button(n) else {
            continue;
        };
        let button = Paragraph::new(n.to_string())
            .style(theme::button(status))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }
}

/// "Game Over" / "You won!" plus the "Play Again" button.
pub fn draw_overlay(frame: &mut Frame, layout: &GameLayout, outcome: Outcome) {
    let Some(text) = outcome.message() else {
        return;
    };

    let message = Paragraph::new(text)
        .style(theme::message(outcome))
        .alignment(Alignment::Center);
    frame.render_widget(message, layout.message);

    let button = Paragraph::new("Play Again")
        .style(theme::play_again())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.play_again);
}

pub fn draw_timer(frame: &mut Frame, area: Rect, seconds_remaining: u32) {
    let timer = Paragraph::new(format!("Time Remaining: {seconds_remaining}"))
        .style(theme::timer())
        .alignment(Alignment::Center);
    frame.render_widget(timer, area);
}
