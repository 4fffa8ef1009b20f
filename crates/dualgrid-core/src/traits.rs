//! Core abstraction traits: the cell value bound and the presentation and
//! input seams.
//!
//! Rendering of per-cell labels and translating pointer input into world
//! positions live outside this workspace. They plug in through
//! [`CellObserver`] and [`RayCaster`] so that no grid crate depends on a
//! rendering or input subsystem.

use crate::coord::{Cell, Position, ScreenPoint};
use crate::id::TickId;

/// Bound for per-cell data stored in a double-buffered grid.
///
/// Values must be plain copies: assignment into a buffer is a value copy,
/// never aliasing, and out-of-bounds reads return `T::default()`.
/// Blanket-implemented for every `Copy + Default + Send + 'static` type.
pub trait CellData: Copy + Default + Send + 'static {}

impl<T: Copy + Default + Send + 'static> CellData for T {}

/// Read-only consumer of per-cell state, e.g. a debug label renderer.
///
/// Called once per cell by the engine's `observe()` fan-out, in canonical
/// order. Observers have no way to mutate the grid.
pub trait CellObserver<T> {
    /// Receive the committed value of one cell.
    ///
    /// `centre` is the world position of the cell's centre, the natural
    /// anchor for an overlay label.
    fn observe(&mut self, tick: TickId, cell: Cell, centre: Position, value: &T);
}

/// Resolves a screen point to the world position it hits, if any.
///
/// Implemented by the host's scene/camera layer (ray casting against
/// rendered geometry). Returning `None` means the ray hit nothing.
pub trait RayCaster {
    /// Cast a ray through `screen` and return the first hit point.
    fn cast(&self, screen: ScreenPoint) -> Option<Position>;
}

impl<F> RayCaster for F
where
    F: Fn(ScreenPoint) -> Option<Position>,
{
    fn cast(&self, screen: ScreenPoint) -> Option<Position> {
        self(screen)
    }
}
