//! Look-ahead generation engine for the Game of Life.
//!
//! A [`Game`] owns one background producer thread that computes future
//! generations into a fixed pool of preallocated grids and publishes them
//! to a bounded look-ahead queue. The caller pulls generations with
//! [`Game::next`]; each call hands the previously delivered buffer back
//! to the producer for reuse.
//!
//! # Architecture
//!
//! ```text
//! Caller thread                         Producer thread
//!     |                                      |
//!     |                                      | seeding: pool.take() x N
//!     |                                      |   compute_next(buf, source)
//!     |<--published [bounded(N)]-------------|   publish_tx.send(buf)
//!     | next(): lookahead_rx.recv()          |
//!     |   recycle_tx.send(previous) -------->| streaming: recycle_rx.recv()
//!     |   [bounded(N)]                       |   compute_next(buf, source)
//!     |<--published--------------------------|   publish_tx.send(buf)
//! ```
//!
//! The two bounded channels are the only synchronisation. The producer
//! blocks while the look-ahead queue is full or no buffer has been
//! returned; the caller blocks while the queue is empty.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod game;
pub(crate) mod pipeline;
pub mod pool;

pub use config::{GameConfig, GameError};
pub use game::{Game, ShutdownReport};
pub use pool::{BufferId, GenerationBuffer, GenerationPool};
