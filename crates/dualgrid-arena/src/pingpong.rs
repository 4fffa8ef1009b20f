//! Double-buffered ping-pong cell store.
//!
//! [`PingPongStore`] owns two equally sized flat buffers that alternate
//! between the "read" role (the committed state every reader sees) and the
//! "write" role (where the next state is assembled). On
//! [`PingPongStore::flip`] the write buffer becomes the read buffer and the
//! old read buffer becomes the next write target.
//!
//! The lifecycle per tick is:
//! 1. `begin_tick()`: split-borrow the read buffer immutably and the
//!    write buffer mutably
//! 2. the simulation pass reads `guard.read` and fills `guard.write`
//! 3. `flip()`: toggle the read index, advance the generation

use dualgrid_core::CellData;
use dualgrid_space::{flat_index, GridGeometry};

use crate::error::ArenaError;

/// Split borrow of both buffers for the duration of a simulation pass.
///
/// Created by [`PingPongStore::begin_tick()`]. While the guard is alive the
/// store cannot be flipped or mutated through any other path, so a pass
/// can never write into the buffer it is reading from.
#[must_use]
pub struct TickGuard<'a, T> {
    /// The committed state as of the start of the tick.
    pub read: &'a [T],
    /// The buffer the pass assembles the next state into.
    pub write: &'a mut [T],
}

/// Double-buffered store of `width × height` cells of `T`.
///
/// # Buffer layout
///
/// ```text
/// buffers[read_index]      ←─── read buffer (get, set_read_direct)
/// buffers[1 - read_index]  ←─── write buffer (set_write)
/// ```
///
/// The write index is always derived from the read index and never stored,
/// so the two cannot drift out of sync. Both buffers are allocated once, at
/// construction, and live as long as the store.
#[derive(Clone, Debug)]
pub struct PingPongStore<T> {
    buffers: [Vec<T>; 2],
    read_index: usize,
    width: u32,
    height: u32,
    generation: u64,
}

impl<T: CellData> PingPongStore<T> {
    /// Allocate a store of `width × height` cells, both buffers filled with
    /// `T::default()`.
    ///
    /// Returns `Err(ArenaError::EmptyStore)` if either dimension is 0 and
    /// `Err(ArenaError::CapacityExceeded)` if the buffers could not be
    /// addressed.
    pub fn new(width: u32, height: u32) -> Result<Self, ArenaError> {
        if width == 0 || height == 0 {
            return Err(ArenaError::EmptyStore);
        }
        let capacity = isize::MAX as u64;
        let cells = u64::from(width) * u64::from(height);
        let requested = cells.saturating_mul(2 * std::mem::size_of::<T>() as u64);
        if cells > capacity || requested > capacity {
            return Err(ArenaError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        let len = cells as usize;
        log::debug!("allocating ping-pong store: {width}x{height} cells, {requested} bytes");
        Ok(Self {
            buffers: [vec![T::default(); len], vec![T::default(); len]],
            read_index: 0,
            width,
            height,
            generation: 0,
        })
    }

    /// Allocate a store shaped like `geometry`.
    pub fn for_geometry(geometry: &GridGeometry) -> Result<Self, ArenaError> {
        Self::new(geometry.width(), geometry.height())
    }

    #[inline]
    fn slot(&self, x: i32, y: i32) -> Option<usize> {
        flat_index(x, y, self.width, self.height)
    }

    /// Seed every cell of BOTH buffers with `seed(x, y)`.
    ///
    /// `seed` is invoked exactly once per cell, in canonical order (outer
    /// `x`, inner `y`). Afterwards the read and write buffers are identical,
    /// so a read before any write observes the initial state.
    pub fn init(&mut self, mut seed: impl FnMut(i32, i32) -> T) {
        let [a, b] = &mut self.buffers;
        let height = self.height as usize;
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                let i = x as usize * height + y as usize;
                let value = seed(x, y);
                a[i] = value;
                b[i] = value;
            }
        }
    }

    /// Value of `(x, y)` in the read buffer, or `T::default()` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.try_get(x, y).unwrap_or_default()
    }

    /// Value of `(x, y)` in the read buffer, or `None` if out of bounds.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<T> {
        self.slot(x, y).map(|i| self.buffers[self.read_index][i])
    }

    /// Write `value` at `(x, y)` in the write buffer. No-op if out of bounds.
    ///
    /// The value becomes visible to [`get`](Self::get) after the next
    /// [`flip`](Self::flip).
    #[inline]
    pub fn set_write(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.slot(x, y) {
            let w = self.write_index();
            self.buffers[w][i] = value;
        }
    }

    /// Write `value` at `(x, y)` directly in the read buffer, bypassing the
    /// flip. No-op if out of bounds.
    ///
    /// Visible to the very next [`get`](Self::get). Must not be called while a
    /// pass is reading the buffer; the borrow on [`TickGuard`] enforces this.
    #[inline]
    pub fn set_read_direct(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.slot(x, y) {
            self.buffers[self.read_index][i] = value;
        }
    }

    /// Replace `(x, y)` in the read buffer with `f(current)`.
    ///
    /// Returns `false` (and does not call `f`) if out of bounds.
    pub fn update_read_direct(&mut self, x: i32, y: i32, f: impl FnOnce(T) -> T) -> bool {
        match self.slot(x, y) {
            Some(i) => {
                let cell = &mut self.buffers[self.read_index][i];
                *cell = f(*cell);
                true
            }
            None => false,
        }
    }

    /// Swap the read and write roles. O(1): no data is copied or reallocated.
    ///
    /// Everything written with [`set_write`](Self::set_write) since the last
    /// flip becomes readable. The previous read buffer becomes the write
    /// target with whatever contents it held; a pass that leaves cells
    /// untouched must [`carry_forward`](Self::carry_forward) first.
    pub fn flip(&mut self) {
        self.read_index = self.write_index();
        self.generation += 1;
        log::trace!(
            "flip: read {} | write {} (generation {})",
            self.read_index,
            self.write_index(),
            self.generation
        );
    }

    /// Split-borrow the buffers for a simulation pass.
    pub fn begin_tick(&mut self) -> TickGuard<'_, T> {
        let [a, b] = &mut self.buffers;
        if self.read_index == 0 {
            TickGuard { read: a, write: b }
        } else {
            TickGuard { read: b, write: a }
        }
    }

    /// Copy the read buffer over the write buffer.
    ///
    /// Used before a pass that only updates some cells, so that the cells
    /// it skips keep their committed values after the flip.
    pub fn carry_forward(&mut self) {
        let guard = self.begin_tick();
        guard.write.copy_from_slice(guard.read);
    }

    /// Index (0 or 1) of the buffer currently designated "read".
    pub fn read_index(&self) -> usize {
        self.read_index
    }

    /// Index of the buffer currently designated "write"; always `1 - read_index`.
    pub fn write_index(&self) -> usize {
        1 - self.read_index
    }

    /// The read buffer, in canonical (`x * height + y`) order.
    pub fn read_slice(&self) -> &[T] {
        &self.buffers[self.read_index]
    }

    /// The write buffer, in canonical order.
    pub fn write_slice(&self) -> &[T] {
        &self.buffers[self.write_index()]
    }

    /// Number of flips since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells per buffer.
    pub fn cell_count(&self) -> usize {
        self.buffers[0].len()
    }

    /// Heap memory held by both buffers, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffers
            .iter()
            .map(|b| b.capacity() * std::mem::size_of::<T>())
            .sum()
    }
}
