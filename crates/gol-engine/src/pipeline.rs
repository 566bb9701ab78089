//! Producer loop: seeding, streaming, and shutdown observation.
//!
//! The producer thread owns [`ProducerState`] exclusively (moved in via
//! `thread::Builder::spawn`). It shares nothing with the caller except
//! the three channel endpoints, and returns a [`ProducerReport`] through
//! its `JoinHandle` when it stops.

use std::sync::Arc;

use crossbeam_channel::{select, Receiver, Sender};
use gol_core::Grid;
use gol_kernel::compute_next;

use crate::pool::{GenerationBuffer, GenerationPool};

/// A computed generation travelling from producer to caller.
#[derive(Debug)]
pub(crate) struct Published {
    /// Generation number, 1 for the first generation after the seed.
    pub generation: u64,
    pub buffer: GenerationBuffer,
}

/// Why the producer loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProducerExit {
    /// The caller dropped the recycling sender.
    RecyclingClosed,
    /// The caller dropped the look-ahead receiver.
    ConsumerGone,
    /// The shutdown sender was dropped.
    ShutdownRequested,
}

/// Returned from the producer thread on exit.
#[derive(Debug)]
pub(crate) struct ProducerReport {
    /// Number of generations computed, including any never delivered.
    pub generations: u64,
    pub exit: ProducerExit,
}

/// State held by the producer thread's main loop.
pub(crate) struct ProducerState {
    pool: GenerationPool,
    /// Last computed generation, the input to the next computation.
    source: Arc<Grid>,
    generation: u64,
    publish_tx: Sender<Published>,
    recycle_rx: Receiver<GenerationBuffer>,
    shutdown_rx: Receiver<()>,
}

impl ProducerState {
    pub fn new(
        initial: Grid,
        pool: GenerationPool,
        publish_tx: Sender<Published>,
        recycle_rx: Receiver<GenerationBuffer>,
        shutdown_rx: Receiver<()>,
    ) -> Self {
        assert_eq!(
            initial.dims(),
            pool.dims(),
            "initial grid and pool dimensions differ"
        );
        Self {
            pool,
            source: Arc::new(initial),
            generation: 0,
            publish_tx,
            recycle_rx,
            shutdown_rx,
        }
    }

    /// Main producer loop. Runs until a channel disconnects.
    ///
    /// Consumes self; the report is recovered via `JoinHandle`.
    pub fn run(mut self) -> ProducerReport {
        let span = tracing::debug_span!("producer", capacity = self.pool.capacity());
        let _entered = span.enter();

        let exit = match self.seed() {
            Ok(()) => {
                tracing::debug!(generations = self.generation, "look-ahead window seeded");
                self.stream()
            }
            Err(exit) => exit,
        };

        tracing::debug!(generations = self.generation, ?exit, "producer stopped");
        ProducerReport {
            generations: self.generation,
            exit,
        }
    }

    /// Fill every pooled buffer with consecutive generations.
    fn seed(&mut self) -> Result<(), ProducerExit> {
        while let Some(buffer) = self.pool.take() {
            self.produce(buffer)?;
        }
        Ok(())
    }

    /// Compute one generation per recycled buffer, forever.
    fn stream(&mut self) -> ProducerExit {
        loop {
            let recycled = select! {
                recv(self.recycle_rx) -> msg => match msg {
                    Ok(buffer) => buffer,
                    Err(_) => return ProducerExit::RecyclingClosed,
                },
                recv(self.shutdown_rx) -> _ => return ProducerExit::ShutdownRequested,
            };
            self.pool.release(recycled);
            let Some(buffer) = self.pool.take() else {
                unreachable!("pool empty straight after a release");
            };
            if let Err(exit) = self.produce(buffer) {
                return exit;
            }
        }
    }

    /// Compute the next generation into `buffer` and publish it.
    fn produce(&mut self, mut buffer: GenerationBuffer) -> Result<(), ProducerExit> {
        compute_next(buffer.grid_mut(), &self.source);
        self.generation += 1;
        // Dropping the old source releases the producer's hold on it.
        self.source = buffer.share();

        let published = Published {
            generation: self.generation,
            buffer,
        };
        select! {
            send(self.publish_tx, published) -> res => res.map_err(|_| ProducerExit::ConsumerGone),
            recv(self.shutdown_rx) -> _ => Err(ProducerExit::ShutdownRequested),
        }
    }
}
