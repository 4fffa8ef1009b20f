//! The [`Propagator`] trait and [`WriteMode`] enum.
//!
//! A propagator is a stateless operator the world runs once per tick. It
//! reads the committed state and writes the next state; the world flips the
//! buffers only if the step succeeds.

use crate::context::StepContext;
use dualgrid_core::{CellData, PropagatorError};

/// Write initialization strategy for the next-state buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// The propagator MUST write every cell.
    ///
    /// The write buffer holds whatever the generation before last left in
    /// it; in debug builds a [`WriteView`](crate::WriteView) tracks coverage
    /// and logs a warning for cells the step never wrote.
    #[default]
    Full,

    /// The write buffer is seeded from the read buffer before the step.
    /// The propagator modifies only the cells it needs to update.
    Incremental,
}

/// The per-tick update rule of a grid world.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: propagators are stateless; all mutable state lives in cells.
/// - Every value written must depend only on the read view, never on
///   values written earlier in the same step.
///
/// # Object safety
///
/// This trait is object-safe; the world stores its propagator as
/// `Box<dyn Propagator<T>>`.
///
/// # Examples
///
/// A minimal propagator that fills every cell with a constant:
///
/// ```
/// use dualgrid_propagator::{Propagator, StepContext, WriteMode};
/// use dualgrid_core::PropagatorError;
///
/// struct ConstantFill {
///     value: f32,
/// }
///
/// impl Propagator<f32> for ConstantFill {
///     fn name(&self) -> &str { "constant_fill" }
///
///     fn step(&self, ctx: &mut StepContext<'_, f32>) -> Result<(), PropagatorError> {
///         ctx.writes().as_mut_slice().fill(self.value);
///         Ok(())
///     }
/// }
///
/// let prop = ConstantFill { value: 42.0 };
/// assert_eq!(prop.name(), "constant_fill");
/// assert_eq!(prop.write_mode(), WriteMode::Full);
/// ```
pub trait Propagator<T: CellData>: Send + 'static {
    /// Human-readable name for error reporting and logging.
    fn name(&self) -> &str;

    /// How the write buffer is prepared before [`step`](Self::step).
    ///
    /// Default: [`WriteMode::Full`].
    fn write_mode(&self) -> WriteMode {
        WriteMode::Full
    }

    /// Compute the next state.
    ///
    /// Called once per tick. On `Err` the world discards the write buffer
    /// and does not flip, so the committed state is unchanged.
    fn step(&self, ctx: &mut StepContext<'_, T>) -> Result<(), PropagatorError>;
}
