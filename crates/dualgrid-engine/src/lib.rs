//! Tick loop, injection ingress and observation for dualgrid worlds.
//!
//! [`GridWorld`] owns a grid geometry, a double-buffered cell store and a
//! propagator. Each [`step()`](GridWorld::step) drains pending injections
//! into the committed state, runs the propagator from the committed buffer
//! into the next buffer, and flips. Other threads never touch the store:
//! they submit injections through an [`InjectionSender`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ingress;
pub mod metrics;
pub mod world;

pub use config::{ConfigError, GridConfig, WorldConfig, DEFAULT_MAX_PENDING_INJECTIONS};
pub use ingress::{DrainReport, InjectionSender};
pub use metrics::StepMetrics;
pub use world::GridWorld;
