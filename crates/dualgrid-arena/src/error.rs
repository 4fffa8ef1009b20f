//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when allocating a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A store must hold at least one cell.
    EmptyStore,
    /// The two buffers together would exceed the addressable allocation size.
    CapacityExceeded {
        /// Number of bytes requested for both buffers.
        requested: u64,
        /// Largest allocation the platform allows.
        capacity: u64,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStore => write!(f, "store must hold at least one cell"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "store capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}
