//! Terminal Game of Life driven by the look-ahead engine.
//!
//! Starts from an 18-row by 12-column grid holding a ring of eight live
//! cells, then prints one generation every 500 ms. The producer thread
//! keeps up to 16 generations computed ahead of the render loop.
//!
//! Run with:
//!   cargo run --example terminal
//!
//! Set `GOL_GENERATIONS=N` to stop after N generations, and `RUST_LOG`
//! (e.g. `RUST_LOG=gol_engine=debug`) to see engine events on stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use gol_core::render::{write_grid, RenderStyle};
use gol_engine::{Game, GameConfig};
use tracing_subscriber::EnvFilter;

const TICK: Duration = Duration::from_millis(500);
const WIDTH: usize = 12;
const HEIGHT: usize = 18;

/// Rows 4..=6, columns 4..=6 of the starting grid.
fn initial_rows() -> Vec<Vec<bool>> {
    let mut rows = vec![vec![false; WIDTH]; HEIGHT];
    for (r, row) in rows.iter_mut().enumerate().take(7).skip(4) {
        for (c, cell) in row.iter_mut().enumerate().take(7).skip(4) {
            *cell = !(r == 5 && c == 5);
        }
    }
    rows
}

fn generation_limit() -> Option<u64> {
    let raw = std::env::var("GOL_GENERATIONS").ok()?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "ignoring invalid GOL_GENERATIONS");
            None
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut game = match Game::from_rows(&initial_rows(), GameConfig::default()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("failed to start game: {e}");
            return ExitCode::FAILURE;
        }
    };

    let limit = generation_limit();
    let style = RenderStyle::default();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut deadline = Instant::now();

    while limit.is_none_or(|n| game.generation() < n) {
        deadline += TICK;
        let grid = game.next();
        let written = write_grid(&mut out, grid, &style).and_then(|()| out.flush());
        if let Err(e) = written {
            // Closed stdout (e.g. piped into `head`) ends the demo.
            tracing::debug!(error = %e, "stdout closed");
            break;
        }
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }

    let report = game.shutdown();
    tracing::info!(?report, "demo finished");
    ExitCode::SUCCESS
}
