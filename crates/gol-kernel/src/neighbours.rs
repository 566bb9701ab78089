//! Bounded 8-connected neighbourhood.

use gol_core::Grid;
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Resolve `val + delta` along an axis of length `len`.
/// Returns `None` when the result falls outside `[0, len)`.
#[inline]
fn offset_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
    let shifted = val.checked_add_signed(delta)?;
    (shifted < len).then_some(shifted)
}

/// In-bounds neighbours of `(row, col)` on a `width × height` grid.
///
/// Interior cells have 8 neighbours, edge cells 5, corners 3, and a
/// 1×1 grid none.
pub fn neighbours(
    (width, height): (usize, usize),
    row: usize,
    col: usize,
) -> SmallVec<[(usize, usize); 8]> {
    let mut out = SmallVec::new();
    for (dr, dc) in OFFSETS_8 {
        if let (Some(nr), Some(nc)) = (offset_axis(row, dr, height), offset_axis(col, dc, width))
        {
            out.push((nr, nc));
        }
    }
    out
}

/// Number of live cells among the in-bounds neighbours of `(row, col)`.
///
/// Always in `[0, 8]`.
///
/// # Panics
///
/// Panics if `(row, col)` is outside `grid`.
///
/// # Examples
///
/// ```
/// use gol_core::Grid;
/// use gol_kernel::count_live_neighbours;
///
/// // Top-left corner with a single diagonal neighbour.
/// let grid = Grid::from_live_cells(3, 3, &[(0, 0), (1, 1), (2, 2)]).unwrap();
/// assert_eq!(count_live_neighbours(&grid, 0, 0), 1);
/// assert_eq!(count_live_neighbours(&grid, 1, 1), 2);
/// ```
#[inline]
pub fn count_live_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let (width, height) = grid.dims();
    assert!(
        row < height && col < width,
        "cell ({row}, {col}) out of bounds for {width}x{height} grid"
    );
    let mut count = 0u8;
    for (dr, dc) in OFFSETS_8 {
        if let (Some(nr), Some(nc)) = (offset_axis(row, dr, height), offset_axis(col, dc, width))
        {
            count += u8::from(grid.is_alive(nr, nc));
        }
    }
    count
}
