//! Grid geometry for dualgrid simulations.
//!
//! This crate defines [`GridGeometry`], the immutable shape of a
//! double-buffered grid: its internal (sub-divided) dimensions, the
//! world-space size of one cell, and the origin the grid is anchored at.
//! All spatial helpers are pure functions of that shape:
//!
//! - the coordinate mapper ([`GridGeometry::cell_to_world`],
//!   [`GridGeometry::world_to_cell`]),
//! - the bounds check ([`GridGeometry::in_bounds`]) and the single
//!   clamped flat-index function every buffer access goes through
//!   ([`flat_index`]),
//! - the neighbour enumerator ([`GridGeometry::neighbours`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod neighbours;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use geometry::{flat_index, GridGeometry};
pub use neighbours::{NeighbourWindow, Neighbours};
