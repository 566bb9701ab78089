//! The caller-facing [`Game`]: construction, blocking and non-blocking
//! generation delivery, and shutdown.
//!
//! Generations are handed out by reference. [`Game::next`] borrows the
//! game mutably, so a delivered grid cannot outlive the following call;
//! clone it to keep it longer.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use gol_core::Grid;

use crate::config::{GameConfig, GameError};
use crate::pipeline::{ProducerReport, ProducerState, Published};
use crate::pool::{GenerationBuffer, GenerationPool};

// ── ShutdownReport ───────────────────────────────────────────────

/// Report from [`Game::shutdown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Total time spent in the shutdown sequence.
    pub total_ms: u64,
    /// Whether the producer thread was joined successfully.
    pub producer_joined: bool,
    /// Generations the producer computed, delivered or not. Zero if the
    /// producer panicked or was already shut down.
    pub generations_produced: u64,
    /// Generations handed to the caller through `next`/`try_next`.
    pub generations_delivered: u64,
}

// ── GameState ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Running,
    Stopped,
}

// ── Game ─────────────────────────────────────────────────────────

/// A running Game of Life with a background look-ahead producer.
///
/// The producer computes up to `lookahead` generations ahead of the
/// caller and then waits for delivered buffers to come back before
/// computing more. Dropping the game stops and joins the producer.
pub struct Game {
    lookahead_rx: Option<Receiver<Published>>,
    recycle_tx: Option<Sender<GenerationBuffer>>,
    /// Never sent on; dropping it broadcasts the stop.
    shutdown_tx: Option<Sender<()>>,
    producer: Option<JoinHandle<ProducerReport>>,
    /// The most recently delivered generation.
    current: Option<Published>,
    dims: (usize, usize),
    lookahead: usize,
    state: GameState,
}

impl Game {
    /// Validate `config`, preallocate the buffer pool, and start the
    /// producer thread seeding from `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LookaheadTooSmall`] for an unworkable config,
    /// or [`GameError::ThreadSpawnFailed`] if the OS refuses the thread.
    pub fn new(initial: Grid, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let dims = initial.dims();
        let (width, height) = dims;
        let pool = GenerationPool::new(width, height, config.lookahead)?;

        let (publish_tx, lookahead_rx) = bounded(config.lookahead);
        let (recycle_tx, recycle_rx) = bounded(config.lookahead);
        let (shutdown_tx, shutdown_rx) = bounded(0);

        let state = ProducerState::new(initial, pool, publish_tx, recycle_rx, shutdown_rx);
        let producer = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || state.run())
            .map_err(|e| GameError::ThreadSpawnFailed {
                reason: format!("generation producer: {e}"),
            })?;

        tracing::info!(
            width,
            height,
            lookahead = config.lookahead,
            thread = %config.thread_name,
            "game started"
        );

        Ok(Self {
            lookahead_rx: Some(lookahead_rx),
            recycle_tx: Some(recycle_tx),
            shutdown_tx: Some(shutdown_tx),
            producer: Some(producer),
            current: None,
            dims,
            lookahead: config.lookahead,
            state: GameState::Running,
        })
    }

    /// Validate raw rows, then start a game from them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] for malformed rows, otherwise as
    /// [`Game::new`].
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R], config: GameConfig) -> Result<Self, GameError> {
        Self::new(Grid::from_rows(rows)?, config)
    }

    /// Start a game with [`GameConfig::default`].
    pub fn with_defaults(initial: Grid) -> Result<Self, GameError> {
        Self::new(initial, GameConfig::default())
    }

    /// Block until the next generation is ready and return it.
    ///
    /// The previously returned generation's buffer goes back to the
    /// producer for reuse.
    ///
    /// # Panics
    ///
    /// Panics if called after [`shutdown`](Self::shutdown), or if the
    /// producer thread has died.
    pub fn next(&mut self) -> &Grid {
        let published = match self.receiver().recv() {
            Ok(published) => published,
            Err(_) => self.producer_gone(),
        };
        self.deliver(published)
    }

    /// Return the next generation if one is already computed, without
    /// blocking.
    ///
    /// # Panics
    ///
    /// As [`next`](Self::next).
    pub fn try_next(&mut self) -> Option<&Grid> {
        let published = match self.receiver().try_recv() {
            Ok(published) => published,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => self.producer_gone(),
        };
        Some(self.deliver(published))
    }

    /// Number of the last delivered generation; 0 before the first.
    pub fn generation(&self) -> u64 {
        self.current.as_ref().map_or(0, |p| p.generation)
    }

    /// The last delivered generation, if any. Still available after
    /// shutdown.
    pub fn current(&self) -> Option<&Grid> {
        self.current.as_ref().map(|p| p.buffer.grid())
    }

    /// `(width, height)` of every generation.
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    /// Configured look-ahead capacity.
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Number of generations computed and waiting for the caller.
    pub fn ready(&self) -> usize {
        self.lookahead_rx.as_ref().map_or(0, Receiver::len)
    }

    /// Whether the producer is still attached.
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Stop the producer and join it.
    ///
    /// Drops all three channel endpoints; the producer observes the
    /// disconnection at whichever point it is blocked. Pending, undelivered
    /// generations are discarded. Calling this twice is harmless.
    pub fn shutdown(&mut self) -> ShutdownReport {
        if self.state == GameState::Stopped {
            return ShutdownReport {
                total_ms: 0,
                producer_joined: true,
                generations_produced: 0,
                generations_delivered: self.generation(),
            };
        }

        let start = Instant::now();
        self.state = GameState::Stopped;
        self.shutdown_tx.take();
        self.recycle_tx.take();
        self.lookahead_rx.take();

        let (producer_joined, generations_produced) = match self.producer.take() {
            Some(handle) => match handle.join() {
                Ok(report) => {
                    tracing::debug!(exit = ?report.exit, "producer joined");
                    (true, report.generations)
                }
                Err(_) => (false, 0),
            },
            None => (true, 0),
        };

        let report = ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            producer_joined,
            generations_produced,
            generations_delivered: self.generation(),
        };
        if report.producer_joined {
            tracing::info!(
                produced = report.generations_produced,
                delivered = report.generations_delivered,
                total_ms = report.total_ms,
                "game shut down"
            );
        } else {
            tracing::warn!("generation producer panicked before shutdown");
        }
        report
    }

    fn receiver(&self) -> &Receiver<Published> {
        match &self.lookahead_rx {
            Some(rx) => rx,
            None => panic!("Game::next called after shutdown"),
        }
    }

    fn producer_gone(&self) -> ! {
        panic!(
            "generation producer exited unexpectedly after delivering generation {}",
            self.generation()
        )
    }

    /// Make `published` current and hand the previous buffer back.
    fn deliver(&mut self, published: Published) -> &Grid {
        let expected = self.generation() + 1;
        assert_eq!(
            published.generation, expected,
            "generations delivered out of order"
        );
        if let Some(previous) = self.current.take() {
            if let Some(tx) = &self.recycle_tx {
                // Never full: the queue holds every buffer at most once.
                // A send error means the producer is gone, which the
                // following `next` reports.
                let _ = tx.send(previous.buffer);
            }
        }
        self.current.insert(published).buffer.grid()
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        if self.state != GameState::Stopped {
            self.shutdown();
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("dims", &self.dims)
            .field("lookahead", &self.lookahead)
            .field("generation", &self.generation())
            .field("ready", &self.ready())
            .field("state", &self.state)
            .finish()
    }
}
