//! End-to-end round scenarios.
//!
//! These tests drive rounds through the same entry points the terminal front
//! end uses: number selections with displayed status, clock advancement and
//! "Play Again".

use std::time::{Duration, Instant};

use star_match::core::math;
use star_match::ui::{command_for_key, Command};
use star_match::{
    GameEngine, GameRng, NumberStatus, Outcome, Round, RoundState, Selection, Session, Transition,
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn round_with(target: u32, available: &[u32], candidates: &[u32], seconds: u32) -> (Round, Instant) {
    let state = RoundState::new(target, available.iter().copied(), candidates, seconds).unwrap();
    let now = Instant::now();
    let engine = GameEngine::from_state(state, GameRng::new(2024));
    (Round::from_engine(1, engine, now), now)
}

fn available(round: &Round) -> Vec<u32> {
    round.engine().state().available().iter().copied().collect()
}

// =============================================================================
// Matching
// =============================================================================

/// Test that clicking 2 then 3 against a target of 5 removes both.
#[test]
fn test_match_two_and_three() {
    let (mut round, _) = round_with(5, &[1, 2, 3, 4, 5, 6, 7, 8, 9], &[], 10);

    let first = round.on_number_selected(2, round.status_of(2)).unwrap();
    assert_eq!(first, Selection::Applied(Transition::Pending));
    assert_eq!(round.status_of(2), NumberStatus::Candidate);

    let second = round.on_number_selected(3, round.status_of(3)).unwrap();
    assert!(matches!(second, Selection::Applied(Transition::Matched { .. })));

    assert!(round.engine().state().candidates().is_empty());
    assert_eq!(available(&round), vec![1, 4, 5, 6, 7, 8, 9]);
    assert_eq!(round.status_of(2), NumberStatus::Used);
    assert_eq!(round.status_of(3), NumberStatus::Used);

    let target = round.engine().state().target();
    assert!(math::achievable_sums(&available(&round), 9).contains(&target));
}

/// Test that matching the last number wins regardless of the stale target.
#[test]
fn test_last_number_wins() {
    let (mut round, start) = round_with(7, &[7], &[], 10);

    round.select(7).unwrap();

    let view = round.view();
    assert_eq!(view.outcome, Outcome::Won);
    assert_eq!(view.outcome.message(), Some("You won!"));
    assert!(view.statuses.iter().all(|&s| s == NumberStatus::Used));

    // Clock is stopped
    assert_eq!(round.advance_clock(start + Duration::from_secs(30)), 0);
    assert_eq!(round.view().seconds_remaining, 10);
}

/// Test that an overshooting selection is flagged but not blocked.
#[test]
fn test_overshoot_marks_wrong() {
    let (mut round, _) = round_with(5, &[1, 2, 3, 4, 5, 6, 7, 8, 9], &[], 10);

    round.select(8).unwrap();
    assert_eq!(round.status_of(8), NumberStatus::Wrong);

    round.select(9).unwrap();
    assert!(round.candidates_exceed_target());
    assert_eq!(round.status_of(8), NumberStatus::Wrong);
    assert_eq!(round.status_of(9), NumberStatus::Wrong);

    // Backing out of the overshoot
    round.select(8).unwrap();
    round.select(9).unwrap();
    assert!(round.engine().state().candidates().is_empty());
    assert!(!round.candidates_exceed_target());
}

/// Test that a full round can be cleared by always picking a reachable set.
#[test]
fn test_clear_whole_board() {
    let mut round = Round::new(1, GameRng::new(99), Instant::now());

    for _ in 0..9 {
        if round.outcome() == Outcome::Won {
            break;
        }
        let state = round.engine().state();
        let pool: Vec<u32> = state.available().iter().copied().collect();
        let pick = subset_with_sum(&pool, state.target()).expect("target must be reachable");

        for n in pick {
            round.select(n).unwrap();
        }
    }

    assert_eq!(round.outcome(), Outcome::Won);
    assert!(round.engine().state().available().is_empty());
}

fn subset_with_sum(pool: &[u32], target: u32) -> Option<Vec<u32>> {
    (1u32..(1 << pool.len())).find_map(|mask| {
        let subset: Vec<u32> = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &n)| n)
            .collect();
        (math::sum(&subset) == target).then_some(subset)
    })
}

// =============================================================================
// Clock
// =============================================================================

/// Test that running out of time loses and freezes the board.
#[test]
fn test_time_runs_out() {
    let (mut round, start) = round_with(7, &[3, 4, 5], &[3], 3);

    for s in 1..=3 {
        assert_eq!(round.advance_clock(start + Duration::from_secs(s)), 1);
    }

    let view = round.view();
    assert_eq!(view.outcome, Outcome::Lost);
    assert_eq!(view.outcome.message(), Some("Game Over"));
    assert_eq!(view.seconds_remaining, 0);

    assert_eq!(round.select(4).unwrap(), Selection::Ignored);
    assert_eq!(round.engine().state().candidates(), &[3]);
    assert_eq!(round.advance_clock(start + Duration::from_secs(10)), 0);
}

/// Test that a lost round rejects number keys before they reach the round.
#[test]
fn test_lost_round_suppresses_number_keys() {
    let (round, _) = round_with(7, &[3, 4], &[], 0);
    let outcome = round.outcome();

    assert_eq!(outcome, Outcome::Lost);
    let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
    assert_eq!(command_for_key(key, outcome), None);

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(command_for_key(enter, outcome), Some(Command::PlayAgain));
}

// =============================================================================
// Session
// =============================================================================

/// Test that "Play Again" replaces a lost round with a fresh one.
#[test]
fn test_play_again_after_loss() {
    let start = Instant::now();
    let mut session = Session::new(GameRng::new(5), start);

    session.round_mut().select(1).unwrap();
    session.round_mut().advance_clock(start + Duration::from_secs(15));
    assert_eq!(session.round().outcome(), Outcome::Lost);

    let restart = start + Duration::from_secs(16);
    session.start_new_round(restart);

    let view = session.round().view();
    assert_eq!(view.round_id, 2);
    assert_eq!(view.outcome, Outcome::Active);
    assert_eq!(view.seconds_remaining, 10);
    assert!(view.statuses.iter().all(|&s| s == NumberStatus::Available));

    // The new clock starts from the restart, not the old round
    assert_eq!(session.round_mut().advance_clock(restart + Duration::from_millis(900)), 0);
    assert_eq!(session.round_mut().advance_clock(restart + Duration::from_secs(1)), 1);
}
