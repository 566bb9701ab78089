//! Transition kernel for the look-ahead Game of Life.
//!
//! Computes one generation from its predecessor:
//!
//! - [`neighbours`]: bounded 8-connected neighbourhood and live counts
//! - [`rule`]: the Conway B3/S23 per-cell rule
//! - [`transition`]: whole-grid and per-row next-generation kernels
//!
//! The grid is bounded: cells outside it are treated as absent, never
//! wrapped around to the opposite edge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neighbours;
pub mod rule;
pub mod transition;

pub use neighbours::{count_live_neighbours, neighbours};
pub use rule::next_state;
pub use transition::{compute_next, compute_rows, step};
