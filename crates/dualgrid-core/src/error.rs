//! Error types for the dualgrid simulation framework.
//!
//! Organized by subsystem: step (tick engine), propagator, and ingress.
//! Out-of-bounds cell access is intentionally absent from this module: it
//! is never an error, only a default read or an ignored write.

use std::error::Error;
use std::fmt;

use crate::coord::Cell;

/// Errors from the tick engine during `step()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A propagator returned an error during execution. The tick was
    /// rolled back: no flip happened and the read buffer is unchanged.
    PropagatorFailed {
        /// Name of the failing propagator.
        name: String,
        /// The underlying propagator error.
        reason: PropagatorError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropagatorFailed { name, reason } => {
                write!(f, "propagator '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PropagatorFailed { reason, .. } => Some(reason),
        }
    }
}

/// Errors from individual propagator execution.
///
/// Returned by `Propagator::step()` and wrapped in
/// [`StepError::PropagatorFailed`] by the tick engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagatorError {
    /// The propagator's step function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A non-finite value was produced for a cell.
    NonFinite {
        /// The cell whose new value was NaN or infinite.
        cell: Cell,
    },
}

impl fmt::Display for PropagatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::NonFinite { cell } => write!(f, "non-finite value produced at cell {cell}"),
        }
    }
}

impl Error for PropagatorError {}

/// Errors from the injection ingress channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngressError {
    /// The pending-injection queue is at capacity.
    QueueFull,
    /// The world owning the queue has been dropped.
    Disconnected,
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "injection queue full"),
            Self::Disconnected => write!(f, "world has been dropped"),
        }
    }
}

impl Error for IngressError {}
