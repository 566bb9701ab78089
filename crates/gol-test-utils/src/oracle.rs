//! Reference Game of Life implementation for parity checks.
//!
//! Deliberately shares no code with `gol-kernel`: it works on a set of
//! live coordinates in signed space, counts candidate births by
//! scattering from each live cell, and discards anything that lands
//! outside the grid.

use std::collections::{HashMap, HashSet};

use gol_core::Grid;

/// Live-neighbour count of `(row, col)` by direct enumeration.
pub fn live_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut n = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r < 0 || c < 0 {
                continue;
            }
            if grid.get(r as usize, c as usize) == Some(true) {
                n += 1;
            }
        }
    }
    n
}

/// The generation after `grid` on a bounded plane.
pub fn step(grid: &Grid) -> Grid {
    let (width, height) = grid.dims();
    let live: HashSet<(i64, i64)> = grid
        .live_cells()
        .into_iter()
        .map(|(r, c)| (r as i64, c as i64))
        .collect();

    let mut counts: HashMap<(i64, i64), u8> = HashMap::new();
    for &(r, c) in &live {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr != 0 || dc != 0 {
                    *counts.entry((r + dr, c + dc)).or_insert(0) += 1;
                }
            }
        }
    }

    let in_bounds =
        |(r, c): (i64, i64)| r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width;
    let next: Vec<(usize, usize)> = counts
        .into_iter()
        .filter(|&(pos, n)| in_bounds(pos) && (n == 3 || (n == 2 && live.contains(&pos))))
        .map(|((r, c), _)| (r as usize, c as usize))
        .collect();

    Grid::from_live_cells(width, height, &next).expect("dimensions come from an existing grid")
}
