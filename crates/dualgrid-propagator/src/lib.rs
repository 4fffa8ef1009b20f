//! Propagator trait and step context for dualgrid simulations.
//!
//! A [`Propagator`] computes the next state of every cell from the committed
//! state. It sees the committed buffer through a [`ReadView`] and fills the
//! next buffer through a [`WriteView`], both bundled in a [`StepContext`].
//! The two views borrow different buffers, so a propagator cannot observe
//! its own writes within a tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod guard;
pub mod propagator;

pub use context::{ReadView, StepContext};
pub use guard::WriteView;
pub use propagator::{Propagator, WriteMode};
