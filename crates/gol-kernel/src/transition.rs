//! Whole-grid and per-row next-generation kernels.
//!
//! No cell's next value depends on any other cell's next value, so rows
//! can be computed in any order, or in parallel over disjoint slices of
//! the destination via [`compute_rows`].

use gol_core::Grid;

use crate::neighbours::count_live_neighbours;
use crate::rule::next_state;

/// Write the generation after `src` into `dst`.
///
/// `dst` is fully overwritten; its previous contents are irrelevant.
/// `src` is read-only and cannot alias `dst`.
///
/// # Panics
///
/// Panics if `dst` and `src` have different dimensions.
pub fn compute_next(dst: &mut Grid, src: &Grid) {
    assert_eq!(
        dst.dims(),
        src.dims(),
        "transition between grids of different dimensions"
    );
    for (r, row) in dst.rows_mut().enumerate() {
        compute_row(row, src, r);
    }
}

/// Compute a contiguous band of rows of the next generation.
///
/// `dst` is a row-major slice holding whole rows of the destination,
/// starting at row `first_row` of `src`. Its length must be a multiple
/// of `src.width()` and the band must lie inside `src`.
///
/// # Panics
///
/// Panics if `dst` does not hold whole rows or runs past the last row.
pub fn compute_rows(dst: &mut [bool], src: &Grid, first_row: usize) {
    let width = src.width();
    assert_eq!(
        dst.len() % width,
        0,
        "destination band of {} cells is not a whole number of {width}-cell rows",
        dst.len()
    );
    let band_rows = dst.len() / width;
    assert!(
        first_row + band_rows <= src.height(),
        "rows {first_row}..{} exceed grid height {}",
        first_row + band_rows,
        src.height()
    );
    for (i, row) in dst.chunks_exact_mut(width).enumerate() {
        compute_row(row, src, first_row + i);
    }
}

/// Allocate and return the generation after `src`.
///
/// Convenience for tests and one-off use; the pipeline writes into
/// pooled buffers with [`compute_next`] instead.
pub fn step(src: &Grid) -> Grid {
    let mut dst = src.clone();
    compute_next(&mut dst, src);
    dst
}

#[inline]
fn compute_row(dst_row: &mut [bool], src: &Grid, r: usize) {
    for (c, cell) in dst_row.iter_mut().enumerate() {
        *cell = next_state(src.is_alive(r, c), count_live_neighbours(src, r, c));
    }
}
