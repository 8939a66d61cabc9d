//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::{BOARD_SIZE, STAR_CONFIG};

const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;
const GRID_COLUMNS: u16 = 3;
const PLAY_AGAIN_WIDTH: u16 = 16;

/// Where every piece of the game screen goes for a given terminal area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameLayout {
    pub title: Rect,
    /// Stars while playing, end-of-round overlay afterwards.
    pub left: Rect,
    pub right: Rect,
    pub timer: Rect,
    /// One button per board number, ascending.
    pub buttons: [Rect; BOARD_SIZE],
    pub message: Rect,
    pub play_again: Rect,
}

impl GameLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [title, body, timer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(BUTTON_HEIGHT * 3),
            Constraint::Length(1),
        ])
        .areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

        let grid_rows = (BOARD_SIZE as u16).div_ceil(GRID_COLUMNS);
        let grid_width = GRID_COLUMNS * BUTTON_WIDTH + (GRID_COLUMNS - 1) * BUTTON_GAP;
        let grid = centered(right, grid_width, grid_rows * BUTTON_HEIGHT);
        let buttons = std::array::from_fn(|i| {
            let (row, col) = (i as u16 / GRID_COLUMNS, i as u16 % GRID_COLUMNS);
            Rect::new(
                grid.x + col * (BUTTON_WIDTH + BUTTON_GAP),
                grid.y + row * BUTTON_HEIGHT,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
            .intersection(right)
        });

        let overlay = centered(left, PLAY_AGAIN_WIDTH, 1 + BUTTON_HEIGHT);
        let message = Rect::new(left.x, overlay.y, left.width, 1).intersection(left);
        let play_again = Rect::new(overlay.x, overlay.y + 1, PLAY_AGAIN_WIDTH, BUTTON_HEIGHT).intersection(left);

        Self {
            title,
            left,
            right,
            timer,
            buttons,
            message,
            play_again,
        }
    }

    /// Screen area of board number `n`.
    #[must_use]
    pub fn button(&self, n: u32) -> Option<Rect> {
        if !STAR_CONFIG.is_board_number(n) {
            return None;
        }
        Some(self.buttons[(n - STAR_CONFIG.min_number) as usize])
    }

    /// Board number whose button covers the cell, if any.
    #[must_use]
    pub fn number_at(&self, column: u16, row: u16) -> Option<u32> {
        self.buttons
            .iter()
            .position(|r| contains(*r, column, row))
            .map(|i| STAR_CONFIG.min_number + i as u32)
    }

    /// Check if the cell is on the "Play Again" button.
    #[must_use]
    pub fn is_play_again(&self, column: u16, row: u16) -> bool {
        contains(self.play_again, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_do_not_overlap() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24));

        for (i, a) in layout.buttons.iter().enumerate() {
            assert_eq!((a.width, a.height), (BUTTON_WIDTH, BUTTON_HEIGHT));
            for b in &layout.buttons[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_grid_in_right_panel() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24));

        for button in layout.buttons {
            assert!(button.x >= layout.right.x);
            assert!(button.right() <= layout.right.right());
        }
        assert!(layout.play_again.right() <= layout.left.right());
    }

    #[test]
    fn test_hit_testing() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24));

        let five = layout.button(5).unwrap();
        assert_eq!(layout.number_at(five.x, five.y), Some(5));
        assert_eq!(layout.number_at(five.right() - 1, five.bottom() - 1), Some(5));
        assert_eq!(layout.number_at(0, 0), None);
        assert_eq!(layout.button(0), None);

        let play = layout.play_again;
        assert!(layout.is_play_again(play.x + 1, play.y + 1));
        assert!(!layout.is_play_again(five.x, five.y));
    }

    #[test]
    fn test_row_major_order() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24));
        let one = layout.button(1).unwrap();
        let two = layout.button(2).unwrap();
        let four = layout.button(4).unwrap();

        assert_eq!(one.y, two.y);
        assert!(two.x > one.x);
        assert_eq!(four.x, one.x);
        assert!(four.y > one.y);
    }

    #[test]
    fn test_tiny_terminal_stays_in_bounds() {
        let area = Rect::new(0, 0, 10, 4);
        let layout = GameLayout::new(area);

        for button in layout.buttons.iter().filter(|b| !b.is_empty()) {
            assert!(button.right() <= area.right());
            assert!(button.bottom() <= area.bottom());
        }
    }
}
