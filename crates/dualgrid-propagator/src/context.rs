//! Execution context passed to a propagator during tick execution.
//!
//! [`StepContext`] bundles a read-only view of the committed buffer, a
//! mutable view of the next-state buffer, the grid geometry, and the tick
//! being computed.

use dualgrid_core::{Cell, CellData, TickId};
use dualgrid_space::{GridGeometry, Neighbours};

use crate::guard::WriteView;

/// Read-only view of the committed buffer.
///
/// Out-of-bounds reads return `T::default()`, matching the store.
pub struct ReadView<'a, T> {
    data: &'a [T],
    geometry: &'a GridGeometry,
}

impl<T> Clone for ReadView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadView<'_, T> {}

impl<'a, T: CellData> ReadView<'a, T> {
    /// Wrap `data`, laid out in canonical order for `geometry`.
    pub fn new(data: &'a [T], geometry: &'a GridGeometry) -> Self {
        debug_assert_eq!(data.len(), geometry.cell_count());
        Self { data, geometry }
    }

    /// Committed value at `(x, y)`, or `T::default()` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.try_get(x, y).unwrap_or_default()
    }

    /// Committed value at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<T> {
        self.geometry.index(x, y).map(|i| self.data[i])
    }

    /// Committed value at `cell`.
    #[inline]
    pub fn get_cell(&self, cell: Cell) -> T {
        self.get(cell.x, cell.y)
    }

    /// In-bounds neighbours of `(x, y)` within `radius`, excluding the cell.
    pub fn neighbours(&self, x: i32, y: i32, radius: u32) -> Neighbours {
        self.geometry.neighbours(x, y, radius)
    }

    /// The whole buffer in canonical order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Geometry the buffer is laid out for.
    pub fn geometry(&self) -> &'a GridGeometry {
        self.geometry
    }
}

/// Execution context passed to a propagator's `step()` method.
///
/// # Split-borrow semantics
///
/// - **`reads()`** sees the buffer committed by the previous flip (or by
///   direct writes between ticks). It never reflects writes made during
///   the current step.
/// - **`writes()`** targets the other buffer, which becomes readable only
///   after the world flips.
pub struct StepContext<'a, T> {
    reads: ReadView<'a, T>,
    writes: WriteView<'a, T>,
    tick_id: TickId,
}

impl<'a, T: CellData> StepContext<'a, T> {
    /// Construct a new step context.
    ///
    /// Typically called by the world, not by propagators directly.
    pub fn new(reads: ReadView<'a, T>, writes: WriteView<'a, T>, tick_id: TickId) -> Self {
        Self {
            reads,
            writes,
            tick_id,
        }
    }

    /// Committed-state reader.
    ///
    /// Returned by value, so it can be held across calls to
    /// [`writes()`](Self::writes).
    pub fn reads(&self) -> ReadView<'a, T> {
        self.reads
    }

    /// Next-state writer.
    pub fn writes(&mut self) -> &mut WriteView<'a, T> {
        &mut self.writes
    }

    /// Grid geometry.
    pub fn geometry(&self) -> &'a GridGeometry {
        self.reads.geometry()
    }

    /// The tick being computed.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }
}
