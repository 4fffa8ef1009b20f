//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a [`GridWorld`].
//! [`validate()`](WorldConfig::validate) checks structural invariants at
//! startup; [`GridWorld::new()`] calls it before allocating anything.
//!
//! [`GridWorld`]: crate::GridWorld
//! [`GridWorld::new()`]: crate::GridWorld::new

use std::error::Error;
use std::fmt;

use dualgrid_arena::ArenaError;
use dualgrid_core::{CellData, Position};
use dualgrid_propagator::Propagator;
use dualgrid_space::{GridGeometry, SpaceError};

/// Default capacity of the pending-injection queue.
pub const DEFAULT_MAX_PENDING_INJECTIONS: usize = 1024;

// ── GridConfig ─────────────────────────────────────────────────────

/// Logical description of the grid, resolved into a [`GridGeometry`].
///
/// Each logical cell of size `cell_size` is subdivided into
/// `floor(cell_size / grid_scale)` internal cells per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Logical cells along x.
    pub logical_width: u32,
    /// Logical cells along y (world z).
    pub logical_height: u32,
    /// Requested world size of one internal cell.
    pub grid_scale: f32,
    /// World size of one logical cell.
    pub cell_size: f32,
    /// World position of cell `(0, 0)`.
    pub origin: Position,
}

impl Default for GridConfig {
    /// The reference heat grid: 2×2 logical cells of size 1 subdivided at
    /// 0.25, i.e. 8×8 internal cells of size 0.25 at the origin.
    fn default() -> Self {
        Self {
            logical_width: 2,
            logical_height: 2,
            grid_scale: 0.25,
            cell_size: 1.0,
            origin: Position::ZERO,
        }
    }
}

impl GridConfig {
    /// Resolve into internal dimensions.
    pub fn geometry(&self) -> Result<GridGeometry, SpaceError> {
        GridGeometry::new(
            self.logical_width,
            self.logical_height,
            self.grid_scale,
            self.cell_size,
            self.origin,
        )
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`] or world construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid geometry is invalid.
    Space(SpaceError),
    /// The cell store could not be allocated.
    Arena(ArenaError),
    /// Pending-injection queue capacity is zero.
    InjectionQueueZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Arena(e) => write!(f, "store: {e}"),
            Self::InjectionQueueZero => {
                write!(f, "max_pending_injections must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::InjectionQueueZero => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`GridWorld`](crate::GridWorld).
pub struct WorldConfig<T: CellData> {
    /// Grid dimensions, scale and placement.
    pub grid: GridConfig,
    /// The per-tick update rule.
    pub propagator: Box<dyn Propagator<T>>,
    /// Capacity of the pending-injection queue. Submissions beyond it are
    /// rejected with `IngressError::QueueFull` until the next drain.
    pub max_pending_injections: usize,
}

impl<T: CellData> WorldConfig<T> {
    /// Configuration with the default queue capacity.
    pub fn new(grid: GridConfig, propagator: impl Propagator<T>) -> Self {
        Self {
            grid,
            propagator: Box::new(propagator),
            max_pending_injections: DEFAULT_MAX_PENDING_INJECTIONS,
        }
    }

    /// Check structural invariants and resolve the geometry.
    pub fn validate(&self) -> Result<GridGeometry, ConfigError> {
        if self.max_pending_injections == 0 {
            return Err(ConfigError::InjectionQueueZero);
        }
        Ok(self.grid.geometry()?)
    }
}

impl<T: CellData> fmt::Debug for WorldConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldConfig")
            .field("grid", &self.grid)
            .field("propagator", &self.propagator.name())
            .field("max_pending_injections", &self.max_pending_injections)
            .finish()
    }
}
