//! Injection commands for the immediate-write path.
//!
//! An [`Injection`] describes a change to one cell that must be visible on
//! the very next read, without waiting for a tick to flip the buffers
//! (e.g. "add heat at the cell under the pointer"). Injections are
//! submitted from any thread through the engine's ingress channel and
//! applied on the simulation thread between ticks.

use std::fmt;

use crate::coord::Cell;

/// What an [`Injection`] does to its target cell.
pub enum InjectionPayload<T> {
    /// Overwrite the cell with a value.
    Set(T),
    /// Replace the cell with a function of its current value.
    Update(Box<dyn FnOnce(T) -> T + Send>),
}

/// A pending immediate write to a single cell.
///
/// # Examples
///
/// ```
/// use dualgrid_core::{Cell, Injection};
///
/// let inject = Injection::update(Cell::new(3, 3), |t: f64| t + 21.0);
/// assert_eq!(inject.cell, Cell::new(3, 3));
/// assert_eq!(inject.apply(21.0), 42.0);
/// ```
pub struct Injection<T> {
    /// Target cell. Off-grid targets are dropped when applied.
    pub cell: Cell,
    /// The change to make.
    pub payload: InjectionPayload<T>,
}

impl<T> Injection<T> {
    /// Overwrite `cell` with `value`.
    pub fn set(cell: Cell, value: T) -> Self {
        Self {
            cell,
            payload: InjectionPayload::Set(value),
        }
    }

    /// Replace `cell` with `f(current)`.
    pub fn update(cell: Cell, f: impl FnOnce(T) -> T + Send + 'static) -> Self {
        Self {
            cell,
            payload: InjectionPayload::Update(Box::new(f)),
        }
    }

    /// Compute the new value for the target cell from its current value.
    pub fn apply(self, current: T) -> T {
        match self.payload {
            InjectionPayload::Set(value) => value,
            InjectionPayload::Update(f) => f(current),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Injection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Injection");
        s.field("cell", &self.cell);
        match &self.payload {
            InjectionPayload::Set(value) => s.field("set", value),
            InjectionPayload::Update(_) => s.field("update", &"<fn>"),
        };
        s.finish()
    }
}
