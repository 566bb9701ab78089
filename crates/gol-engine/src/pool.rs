//! Fixed pool of preallocated generation buffers.
//!
//! [`GenerationPool`] allocates every grid the pipeline will ever use up
//! front. Buffers then circulate as [`GenerationBuffer`] tokens:
//!
//! ```text
//! free (pool) ──take()──▶ producer writing ──publish──▶ caller reading
//!      ▲                                                      │
//!      └──────────────release()◀──── recycling channel ◀──────┘
//! ```
//!
//! A token's grid may be shared read-only (the producer keeps the last
//! generation it computed as the source of the next one), but it can only
//! be written through [`GenerationBuffer::grid_mut`] by its sole holder.

use std::fmt;
use std::sync::Arc;

use gol_core::{Grid, ValidationError};

/// Stable identity of a pooled buffer, `0..capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ownership token for one pooled grid.
///
/// Not `Clone`: exactly one token per buffer exists, and whoever holds it
/// owns the buffer's place in the cycle.
pub struct GenerationBuffer {
    id: BufferId,
    grid: Arc<Grid>,
}

impl GenerationBuffer {
    /// This buffer's identity.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Read access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Write access to the grid.
    ///
    /// # Panics
    ///
    /// Panics if a read-only handle to this buffer is still alive. The
    /// handoff protocol never lets that happen; reaching it means two
    /// owners would see the same storage.
    pub fn grid_mut(&mut self) -> &mut Grid {
        let id = self.id;
        match Arc::get_mut(&mut self.grid) {
            Some(grid) => grid,
            None => panic!("buffer {id} written while a read-only handle is still alive"),
        }
    }

    /// A read-only handle to the grid, outliving this token's handoff.
    pub(crate) fn share(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }
}

impl fmt::Debug for GenerationBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationBuffer")
            .field("id", &self.id)
            .field("dims", &self.grid.dims())
            .field("holders", &Arc::strong_count(&self.grid))
            .finish()
    }
}

/// Free list of preallocated grids of one size.
pub struct GenerationPool {
    free: Vec<GenerationBuffer>,
    /// `is_free[id]` mirrors membership of `free`, to catch double release.
    is_free: Vec<bool>,
    dims: (usize, usize),
}

impl GenerationPool {
    /// Preallocate `capacity` dead `width × height` grids.
    ///
    /// Returns `Err(ValidationError::ZeroDimension)` for a zero-sized grid.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `u32::MAX`.
    pub fn new(width: usize, height: usize, capacity: usize) -> Result<Self, ValidationError> {
        let template = Grid::dead(width, height)?;
        let count = u32::try_from(capacity).expect("pool capacity exceeds u32::MAX");
        // Reverse so that take() hands out #0 first.
        let free = (0..count)
            .rev()
            .map(|i| GenerationBuffer {
                id: BufferId(i),
                grid: Arc::new(template.clone()),
            })
            .collect();
        Ok(Self {
            free,
            is_free: vec![true; capacity],
            dims: (width, height),
        })
    }

    /// Total number of buffers owned by this pool, free or not.
    pub fn capacity(&self) -> usize {
        self.is_free.len()
    }

    /// Number of buffers currently in the free list.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// `(width, height)` of every buffer.
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    /// Vend a free buffer, or `None` if all are in circulation.
    pub fn take(&mut self) -> Option<GenerationBuffer> {
        let buffer = self.free.pop()?;
        self.is_free[buffer.id.0 as usize] = false;
        Some(buffer)
    }

    /// Return a buffer to the free list.
    ///
    /// # Panics
    ///
    /// Panics if the buffer does not belong to this pool (unknown id or
    /// wrong dimensions) or is already free.
    pub fn release(&mut self, buffer: GenerationBuffer) {
        let idx = buffer.id.0 as usize;
        assert!(
            idx < self.is_free.len(),
            "buffer {} does not belong to a pool of {} buffers",
            buffer.id,
            self.is_free.len()
        );
        assert_eq!(
            buffer.grid.dims(),
            self.dims,
            "buffer {} has foreign dimensions",
            buffer.id
        );
        assert!(!self.is_free[idx], "buffer {} released twice", buffer.id);
        self.is_free[idx] = true;
        self.free.push(buffer);
    }
}

impl fmt::Debug for GenerationPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationPool")
            .field("dims", &self.dims)
            .field("capacity", &self.capacity())
            .field("available", &self.available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn new_preallocates_all_buffers() {
        let pool = GenerationPool::new(12, 18, 16).unwrap();
        assert_eq!(pool.capacity(), 16);
        assert_eq!(pool.available(), 16);
        assert_eq!(pool.dims(), (12, 18));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            GenerationPool::new(0, 3, 4),
            Err(ValidationError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn take_vends_distinct_buffers_in_id_order() {
        let mut pool = GenerationPool::new(4, 4, 3).unwrap();
        let taken: Vec<_> = std::iter::from_fn(|| pool.take()).collect();
        let ids: Vec<u32> = taken.iter().map(|b| b.id().0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(pool.available(), 0);
        assert!(pool.take().is_none());
        for b in &taken {
            assert_eq!(b.grid().dims(), (4, 4));
            assert_eq!(b.grid().population(), 0);
        }
    }

    #[test]
    fn release_makes_buffer_reusable() {
        let mut pool = GenerationPool::new(4, 4, 2).unwrap();
        let mut a = pool.take().unwrap();
        a.grid_mut().set(1, 1, true);
        let id = a.id();
        pool.release(a);
        let again = pool.take().unwrap();
        assert_eq!(again.id(), id);
        // Contents are not cleared; the kernel overwrites every cell.
        assert!(again.grid().is_alive(1, 1));
    }

    #[test]
    fn buffers_are_never_reallocated() {
        let mut pool = GenerationPool::new(8, 8, 4).unwrap();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let a = pool.take().unwrap();
            let b = pool.take().unwrap();
            seen.insert(a.id());
            seen.insert(b.id());
            pool.release(b);
            pool.release(a);
        }
        assert!(seen.len() <= 4);
    }

    #[test]
    #[should_panic(expected = "read-only handle")]
    fn grid_mut_panics_while_shared() {
        let mut pool = GenerationPool::new(4, 4, 2).unwrap();
        let mut a = pool.take().unwrap();
        let _reader = a.share();
        a.grid_mut();
    }

    #[test]
    fn grid_mut_succeeds_after_handle_dropped() {
        let mut pool = GenerationPool::new(4, 4, 2).unwrap();
        let mut a = pool.take().unwrap();
        let reader = a.share();
        drop(reader);
        a.grid_mut().set(0, 0, true);
        assert!(a.grid().is_alive(0, 0));
    }

    #[test]
    #[should_panic(expected = "released twice")]
    fn double_release_panics() {
        let mut pool = GenerationPool::new(4, 4, 2).unwrap();
        let mut other = GenerationPool::new(4, 4, 2).unwrap();
        // A same-id buffer from a twin pool stands in for a duplicate.
        pool.release(other.take().unwrap());
    }

    #[test]
    #[should_panic(expected = "foreign dimensions")]
    fn foreign_dimensions_panic() {
        let mut pool = GenerationPool::new(4, 4, 2).unwrap();
        let _held = pool.take().unwrap();
        let mut other = GenerationPool::new(5, 4, 2).unwrap();
        pool.release(other.take().unwrap());
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn unknown_id_panics() {
        let mut pool = GenerationPool::new(4, 4, 1).unwrap();
        let mut big = GenerationPool::new(4, 4, 3).unwrap();
        big.take();
        big.take();
        pool.release(big.take().unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn take_release_preserves_capacity(
            capacity in 1usize..8,
            ops in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut pool = GenerationPool::new(3, 2, capacity).unwrap();
            let mut out = Vec::new();
            for take in ops {
                if take {
                    if let Some(b) = pool.take() {
                        out.push(b);
                    }
                } else if let Some(b) = out.pop() {
                    pool.release(b);
                }
                prop_assert_eq!(pool.available() + out.len(), capacity);
                let ids: HashSet<BufferId> = out.iter().map(GenerationBuffer::id).collect();
                prop_assert_eq!(ids.len(), out.len());
            }
        }
    }
}
