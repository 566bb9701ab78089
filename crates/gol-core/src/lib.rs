//! Core types for the look-ahead Game of Life.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! dense boolean [`Grid`], the structural [`validate`] pass run on every
//! candidate initial state, the [`ValidationError`] taxonomy, and a plain
//! text renderer used by terminal front-ends.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod render;
pub mod validate;

pub use error::ValidationError;
pub use grid::Grid;
pub use validate::validate;
