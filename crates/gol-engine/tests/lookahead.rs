//! Integration test: generation ordering, backpressure and buffer
//! handoff through the public `Game` API.
//!
//! Every generation delivered by the look-ahead pipeline is compared
//! against the independent oracle in `gol-test-utils`, for runs shorter
//! than, equal to and much longer than the look-ahead window.

use gol_core::Grid;
use gol_engine::{Game, GameConfig, GameError};
use gol_test_utils::{patterns, reference_generations, soup};

fn config(lookahead: usize) -> GameConfig {
    GameConfig {
        lookahead,
        ..GameConfig::default()
    }
}

/// Pull `n` generations, copying each one out as it is delivered.
fn collect(game: &mut Game, n: usize) -> Vec<Grid> {
    (0..n).map(|_| game.next().clone()).collect()
}

// ── Ordering ────────────────────────────────────────────────────────

#[test]
fn fewer_calls_than_lookahead_match_reference() {
    let initial = soup(24, 18, 0.3, 11);
    let expected = reference_generations(&initial, 5);
    let mut game = Game::with_defaults(initial).unwrap();
    assert_eq!(collect(&mut game, 5), expected);
    assert_eq!(game.generation(), 5);
}

#[test]
fn exactly_lookahead_calls_match_reference() {
    let initial = soup(24, 18, 0.3, 12);
    let expected = reference_generations(&initial, 16);
    let mut game = Game::with_defaults(initial).unwrap();
    assert_eq!(collect(&mut game, 16), expected);
}

#[test]
fn many_more_calls_than_lookahead_match_reference() {
    let initial = soup(32, 32, 0.35, 13);
    let expected = reference_generations(&initial, 200);
    let mut game = Game::with_defaults(initial).unwrap();
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(game.next(), want, "generation {}", i + 1);
    }
}

#[test]
fn minimum_lookahead_streams_correctly() {
    let initial = soup(16, 16, 0.4, 14);
    let expected = reference_generations(&initial, 50);
    let mut game = Game::new(initial, config(2)).unwrap();
    assert_eq!(collect(&mut game, 50), expected);
}

// ── Buffer handoff ──────────────────────────────────────────────────

#[test]
fn copies_taken_after_next_are_never_overwritten() {
    let initial = patterns::glider(20, 20, 0, 0);
    let expected = reference_generations(&initial, 64);
    let mut game = Game::new(initial, config(3)).unwrap();
    let copies = collect(&mut game, 64);
    // Let the producer run ahead over the recycled buffers before the
    // copies are checked.
    std::thread::sleep(std::time::Duration::from_millis(20));
    assert_eq!(copies, expected);
}

#[test]
fn slow_consumer_sees_no_gaps() {
    let initial = patterns::blinker(7, 7, 3, 2);
    let mut game = Game::new(initial.clone(), config(4)).unwrap();
    for i in 1..=12u64 {
        if i % 3 == 0 {
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        let grid = game.next().clone();
        assert_eq!(game.generation(), i);
        // Period 2: even generations equal the start.
        assert_eq!(grid == initial, i % 2 == 0, "generation {i}");
    }
}

// ── Patterns ────────────────────────────────────────────────────────

#[test]
fn demo_seed_evolves_like_reference() {
    let initial = patterns::demo_seed();
    let expected = reference_generations(&initial, 40);
    let mut game = Game::with_defaults(initial).unwrap();
    assert_eq!(collect(&mut game, 40), expected);
}

#[test]
fn glider_translates_through_pipeline() {
    let mut game = Game::with_defaults(patterns::glider(16, 16, 2, 2)).unwrap();
    let after_four = collect(&mut game, 4).pop().unwrap();
    assert_eq!(after_four, patterns::glider(16, 16, 3, 3));
}

// ── Construction and lifecycle ──────────────────────────────────────

#[test]
fn from_rows_accepts_rectangular_rows() {
    let rows = vec![
        vec![false, false, false],
        vec![true, true, true],
        vec![false, false, false],
    ];
    let mut game = Game::from_rows(&rows, GameConfig::default()).unwrap();
    assert_eq!(game.dims(), (3, 3));
    let vertical = Grid::from_live_cells(3, 3, &[(0, 1), (1, 1), (2, 1)]).unwrap();
    assert_eq!(game.next(), &vertical);
}

#[test]
fn from_rows_rejects_ragged_last_row() {
    let rows = vec![vec![true, true], vec![true, true], vec![true]];
    let err = Game::from_rows(&rows, GameConfig::default()).unwrap_err();
    assert!(matches!(err, GameError::Grid(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn dropping_mid_stream_does_not_hang() {
    for lookahead in [2, 5, 16] {
        let mut game = Game::new(soup(40, 40, 0.3, lookahead as u64), config(lookahead)).unwrap();
        for _ in 0..(lookahead * 2 + 1) {
            game.next();
        }
        drop(game);
    }
}

#[test]
fn shutdown_report_accounts_for_window() {
    let mut game = Game::new(patterns::block(6, 6, 2, 2), config(4)).unwrap();
    collect(&mut game, 10);
    let report = game.shutdown();
    assert!(report.producer_joined);
    assert_eq!(report.generations_delivered, 10);
    // Ten deliveries returned nine buffers: at most 4 + 9 computed.
    assert!(report.generations_produced >= 10);
    assert!(report.generations_produced <= 13);
}
