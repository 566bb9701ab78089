//! Conway's Game of Life with a background look-ahead pipeline.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sub-crates. For most users, adding `gol` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gol::prelude::*;
//!
//! // A horizontal blinker in the middle of a 5×5 grid.
//! let mut rows = vec![vec![false; 5]; 5];
//! rows[2][1] = true;
//! rows[2][2] = true;
//! rows[2][3] = true;
//!
//! let mut game = Game::from_rows(&rows, GameConfig::default()).unwrap();
//!
//! // Generation 1 is vertical.
//! let first = game.next().clone();
//! assert!(first.is_alive(1, 2) && first.is_alive(3, 2));
//! assert!(!first.is_alive(2, 1));
//!
//! // Generation 2 is back to the start.
//! assert_eq!(game.next().to_rows(), rows);
//! assert_eq!(game.generation(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gol-core` | `Grid`, validation, errors, text rendering |
//! | [`kernel`] | `gol-kernel` | Neighbour counting, the B3/S23 rule, transitions |
//! | [`engine`] | `gol-engine` | `Game`, configuration, buffer pool |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid type, validation, and rendering (`gol-core`).
///
/// [`types::Grid`] is the dense row-major cell matrix used throughout;
/// [`types::render::write_grid`] draws it for terminals.
pub use gol_core as types;

/// Transition kernel (`gol-kernel`).
///
/// [`kernel::compute_next`] writes one generation into a caller-owned
/// grid; [`kernel::step`] allocates.
pub use gol_kernel as kernel;

/// Look-ahead engine (`gol-engine`).
///
/// [`engine::Game`] runs the producer thread and hands out generations.
pub use gol_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use gol::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use gol_core::render::{write_grid, RenderStyle};
    pub use gol_core::{Grid, ValidationError};

    // Engine
    pub use gol_engine::{Game, GameConfig, GameError, ShutdownReport};
}
