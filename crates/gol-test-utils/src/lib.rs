//! Test utilities for Game of Life development.
//!
//! Provides named pattern fixtures ([`patterns`]), an independent
//! reference implementation of the automaton ([`oracle`]) for parity
//! checks, and seeded random soups ([`soup`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod oracle;
pub mod patterns;

use gol_core::Grid;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `width × height` grid where each cell is alive with probability
/// `density`, deterministic for a given `seed`.
pub fn soup(width: usize, height: usize, density: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density.clamp(0.0, 1.0)) as u64;
    let rows: Vec<Vec<bool>> = (0..height)
        .map(|_| (0..width).map(|_| rng.next_u64() < threshold).collect())
        .collect();
    Grid::from_rows(&rows).expect("soup dimensions must be non-zero")
}

/// The first `n` generations after `initial`, computed by the oracle.
pub fn reference_generations(initial: &Grid, n: usize) -> Vec<Grid> {
    let mut out = Vec::with_capacity(n);
    let mut current = initial.clone();
    for _ in 0..n {
        current = oracle::step(&current);
        out.push(current.clone());
    }
    out
}
