//! Core types and traits for the dualgrid simulation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the dualgrid workspace:
//! cell coordinates, world positions, tick IDs, error types, injection
//! commands, and the traits at the presentation and input seams.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod coord;
pub mod error;
pub mod id;
pub mod traits;

pub use command::{Injection, InjectionPayload};
pub use coord::{Cell, Position, ScreenPoint};
pub use error::{IngressError, PropagatorError, StepError};
pub use id::TickId;
pub use traits::{CellData, CellObserver, RayCaster};
