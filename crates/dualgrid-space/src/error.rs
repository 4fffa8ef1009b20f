//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// Only construction can fail. Spatial queries on a built grid never
/// error: out-of-range coordinates are reported as plain coordinates and
/// left to the caller's bounds check.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero logical width or height.
    EmptySpace,
    /// The requested cell size is zero, negative, or not finite.
    InvalidCellSize {
        /// The rejected cell size.
        value: f32,
    },
    /// The subdivision would resolve to fewer than one internal cell per
    /// logical cell (`floor(cell_size / grid_scale) < 1`), or `grid_scale`
    /// is not a positive finite number.
    InvalidScale {
        /// The requested grid scale.
        grid_scale: f32,
        /// The requested logical cell size.
        cell_size: f32,
    },
    /// The origin has a NaN or infinite component.
    NonFiniteOrigin,
    /// A derived dimension exceeds the addressable range.
    DimensionTooLarge {
        /// Name of the offending dimension.
        name: &'static str,
        /// The value that was requested or derived.
        value: u64,
        /// The maximum allowed value.
        max: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be positive and finite (got {value})")
            }
            Self::InvalidScale {
                grid_scale,
                cell_size,
            } => {
                write!(
                    f,
                    "grid scale {grid_scale} yields no subdivision of cell size {cell_size}; \
                     floor(cell_size / grid_scale) must be at least 1"
                )
            }
            Self::NonFiniteOrigin => write!(f, "grid origin must be finite"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
