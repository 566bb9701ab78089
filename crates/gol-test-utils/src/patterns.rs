//! Named pattern fixtures.
//!
//! Each constructor places one pattern on an otherwise dead
//! `width × height` grid with its bounding box's top-left corner at
//! `(row, col)`. Cells that fall outside the grid are dropped.

use gol_core::Grid;

/// Live cells of a 2×2 block (still life).
pub const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

/// Live cells of a horizontal blinker (period-2 oscillator).
pub const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];

/// Live cells of a south-east travelling glider (period 4).
pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Live cells of the 3×3 ring used as the demo's starting state.
pub const RING: &[(usize, usize)] = &[
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// Place `cells` on a dead `width × height` grid offset by `(row, col)`.
pub fn place(width: usize, height: usize, row: usize, col: usize, cells: &[(usize, usize)]) -> Grid {
    let shifted: Vec<(usize, usize)> = cells.iter().map(|&(r, c)| (r + row, c + col)).collect();
    Grid::from_live_cells(width, height, &shifted).expect("fixture dimensions must be non-zero")
}

pub fn block(width: usize, height: usize, row: usize, col: usize) -> Grid {
    place(width, height, row, col, BLOCK)
}

pub fn blinker(width: usize, height: usize, row: usize, col: usize) -> Grid {
    place(width, height, row, col, BLINKER)
}

pub fn glider(width: usize, height: usize, row: usize, col: usize) -> Grid {
    place(width, height, row, col, GLIDER)
}

/// The 12-column by 18-row starting state used by the terminal demo.
pub fn demo_seed() -> Grid {
    place(12, 18, 4, 4, RING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_offsets_cells() {
        let g = glider(8, 8, 1, 2);
        assert_eq!(g.live_cells(), vec![(1, 3), (2, 4), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn place_clips_out_of_bounds() {
        let g = block(3, 3, 2, 2);
        assert_eq!(g.population(), 1);
    }

    #[test]
    fn demo_seed_shape() {
        let g = demo_seed();
        assert_eq!(g.dims(), (12, 18));
        assert_eq!(g.population(), 8);
        assert!(!g.is_alive(5, 5));
        assert!(g.is_alive(5, 4));
    }
}
