//! Dualgrid: double-buffered cellular grid simulation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! dualgrid sub-crates. For most users, adding `dualgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dualgrid::prelude::*;
//!
//! // A 2×2 world of unit cells, each split into 4×4 internal cells.
//! let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
//! let mut world = GridWorld::new(config).unwrap();
//! world.init(|_, _| HeatData::ambient());
//!
//! // Heat one cell, then let it spread.
//! world.injection_sender().submit(heat_injection(Cell::new(3, 3))).unwrap();
//! let metrics = world.step().unwrap();
//! assert_eq!(metrics.injections_applied, 1);
//! assert!(world.get(2, 3).temperature > HeatData::ambient().temperature);
//! assert_eq!(world.tick_id(), TickId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `dualgrid-arena` | The ping-pong cell store |
//! | [`types`] | `dualgrid-core` | Coordinates, IDs, injections, errors, core traits |
//! | [`space`] | `dualgrid-space` | Grid geometry, world mapping, neighbourhoods |
//! | [`propagator`] | `dualgrid-propagator` | Propagator trait, read and write views |
//! | [`propagators`] | `dualgrid-propagators` | Reference heat model |
//! | [`engine`] | `dualgrid-engine` | World configuration, tick loop, injection ingress |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Double-buffered cell storage (`dualgrid-arena`).
pub use dualgrid_arena as arena;

/// Core types, traits, and IDs (`dualgrid-core`).
///
/// Contains cell coordinates, world positions, injection commands, error
/// types, and the traits at the presentation and input seams
/// ([`types::CellObserver`], [`types::RayCaster`]).
pub use dualgrid_core as types;

/// Grid geometry (`dualgrid-space`).
///
/// [`space::GridGeometry`] maps between cells and world positions and
/// enumerates neighbourhoods in canonical order.
pub use dualgrid_space as space;

/// Propagator trait and views (`dualgrid-propagator`).
///
/// The [`propagator::Propagator`] trait is the main extension point for
/// user-defined simulation logic.
pub use dualgrid_propagator as propagator;

/// Reference propagator implementations (`dualgrid-propagators`).
///
/// Includes [`propagators::HeatDiffusion`] and the
/// [`propagators::TemperatureLabels`] observer.
pub use dualgrid_propagators as propagators;

/// World and tick loop (`dualgrid-engine`).
pub use dualgrid_engine as engine;

/// Common imports for typical dualgrid usage.
///
/// ```rust
/// use dualgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use dualgrid_core::{
        Cell, CellData, CellObserver, Injection, Position, RayCaster, ScreenPoint, TickId,
    };

    // Errors
    pub use dualgrid_core::{IngressError, PropagatorError, StepError};

    // Space
    pub use dualgrid_space::GridGeometry;

    // Propagator
    pub use dualgrid_propagator::{Propagator, StepContext, WriteMode};

    // Reference model
    pub use dualgrid_propagators::{heat_injection, HeatData, HeatDiffusion, TemperatureLabels};

    // Engine
    pub use dualgrid_engine::{GridConfig, GridWorld, InjectionSender, StepMetrics, WorldConfig};
}
