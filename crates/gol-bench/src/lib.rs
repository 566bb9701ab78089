//! Benchmark profiles for the look-ahead Game of Life.
//!
//! Provides pre-built starting grids and configs for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), ~30% alive
//! - [`stress_profile`]: 316x316 grid (~100K cells), ~30% alive
//! - [`scatter_grid`]: deterministic live-cell placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gol_core::Grid;
use gol_engine::GameConfig;

/// Build the reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> (Grid, GameConfig) {
    (scatter_grid(100, 100, 30, seed), GameConfig::default())
}

/// Build the stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same density as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> (Grid, GameConfig) {
    (scatter_grid(316, 316, 30, seed), GameConfig::default())
}

/// A `width × height` grid with roughly `percent_alive`% of cells alive.
///
/// Uses a multiplicative hash of the seed and cell index, so the same
/// arguments always give the same grid.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn scatter_grid(width: usize, height: usize, percent_alive: u64, seed: u64) -> Grid {
    let mut grid = Grid::dead(width, height).expect("profile dimensions must be non-zero");
    for r in 0..height {
        for c in 0..width {
            let i = (r * width + c) as u64;
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            // High bits are better mixed than low bits for this LCG step.
            grid.set(r, c, (h >> 33) % 100 < percent_alive);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let (grid, config) = reference_profile(42);
        assert_eq!(grid.dims(), (100, 100));
        config.validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        let (grid, config) = stress_profile(42);
        assert_eq!(grid.dims(), (316, 316));
        config.validate().unwrap();
    }

    #[test]
    fn scatter_grid_density_is_roughly_right() {
        let grid = scatter_grid(100, 100, 30, 7);
        let pop = grid.population();
        assert!((2000..4000).contains(&pop), "population {pop}");
    }

    #[test]
    fn scatter_grid_extremes() {
        assert_eq!(scatter_grid(10, 10, 0, 1).population(), 0);
        assert_eq!(scatter_grid(10, 10, 100, 1).population(), 100);
    }

    #[test]
    fn scatter_grid_deterministic() {
        assert_eq!(scatter_grid(50, 20, 30, 42), scatter_grid(50, 20, 30, 42));
    }
}
