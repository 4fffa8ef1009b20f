//! Reusable propagator test fixtures.
//!
//! Three standard propagators for engine testing:
//!
//! - [`IdentityPropagator`]: copies the committed state forward (Full mode).
//! - [`ConstPropagator`]: writes a constant value (Full mode, no reads).
//! - [`FailingPropagator`]: fails deterministically after N calls.

use dualgrid_core::{CellData, PropagatorError};
use dualgrid_propagator::{Propagator, StepContext, WriteMode};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Copies every committed cell into the next state (Full write mode).
///
/// With this propagator a tick is observable only through injections and
/// the flip itself.
pub struct IdentityPropagator {
    pub name: String,
}

impl IdentityPropagator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<T: CellData> Propagator<T> for IdentityPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, ctx: &mut StepContext<'_, T>) -> Result<(), PropagatorError> {
        let input = ctx.reads().as_slice();
        let output = ctx.writes().as_mut_slice();
        if output.len() != input.len() {
            return Err(PropagatorError::ExecutionFailed {
                reason: format!(
                    "size mismatch: read buffer has {} cells, write buffer has {}",
                    input.len(),
                    output.len(),
                ),
            });
        }
        output.copy_from_slice(input);
        Ok(())
    }
}

/// Writes a constant value to all cells (Full write mode, no reads).
pub struct ConstPropagator<T> {
    pub name: String,
    pub value: T,
}

impl<T> ConstPropagator<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl<T: CellData> Propagator<T> for ConstPropagator<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, ctx: &mut StepContext<'_, T>) -> Result<(), PropagatorError> {
        ctx.writes().as_mut_slice().fill(self.value);
        Ok(())
    }
}

/// Copies state forward, then fails deterministically after a configurable
/// number of successful calls.
///
/// Useful for testing rollback and error propagation in the tick loop.
/// Uses `AtomicUsize` for the call counter so it satisfies `Send`.
pub struct FailingPropagator<T> {
    pub name: String,
    pub succeed_count: usize,
    call_count: AtomicUsize,
    _cell: PhantomData<fn() -> T>,
}

impl<T> FailingPropagator<T> {
    /// Create a propagator that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            call_count: AtomicUsize::new(0),
            _cell: PhantomData,
        }
    }

    /// How many times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl<T: CellData> Propagator<T> for FailingPropagator<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Incremental
    }

    fn step(&self, ctx: &mut StepContext<'_, T>) -> Result<(), PropagatorError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            // Scribble over the write buffer first: a rolled-back tick must
            // not leak it.
            ctx.writes().as_mut_slice().fill(T::default());
            return Err(PropagatorError::ExecutionFailed {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        Ok(())
    }
}
