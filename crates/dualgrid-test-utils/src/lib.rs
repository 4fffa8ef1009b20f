//! Test fixtures for dualgrid development.
//!
//! Provides fixture propagators ([`IdentityPropagator`],
//! [`ConstPropagator`], [`FailingPropagator`]), the reference heat grid
//! geometry, seeded random temperature fields, a [`RecordingObserver`] and
//! a [`FixedRayCaster`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstPropagator, FailingPropagator, IdentityPropagator};

use dualgrid_core::{Cell, CellObserver, Position, RayCaster, ScreenPoint, TickId};
use dualgrid_propagators::HeatData;
use dualgrid_space::GridGeometry;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The reference heat grid: 2×2 logical cells of size 1 at scale 0.25,
/// resolving to 8×8 internal cells of size 0.25 at the origin.
pub fn reference_geometry() -> GridGeometry {
    // The arguments are constants known to be valid.
    match GridGeometry::new(2, 2, 0.25, 1.0, Position::ZERO) {
        Ok(g) => g,
        Err(e) => panic!("reference geometry rejected: {e}"),
    }
}

/// Seed function producing temperatures uniformly in `[min, max)`.
///
/// Deterministic for a given `seed`, provided cells are seeded in the same
/// order (which `init` guarantees).
pub fn random_temperatures(seed: u64, min: f64, max: f64) -> impl FnMut(i32, i32) -> HeatData {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    move |_, _| HeatData::new(rng.random_range(min..max))
}

/// One observed cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation<T> {
    pub tick: TickId,
    pub cell: Cell,
    pub centre: Position,
    pub value: T,
}

/// Observer that records every cell it is shown.
#[derive(Debug)]
pub struct RecordingObserver<T> {
    pub seen: Vec<Observation<T>>,
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    /// Recorded value for `cell`, if it was observed.
    pub fn value_at(&self, cell: Cell) -> Option<&T> {
        self.seen.iter().find(|o| o.cell == cell).map(|o| &o.value)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CellObserver<T> for RecordingObserver<T> {
    fn observe(&mut self, tick: TickId, cell: Cell, centre: Position, value: &T) {
        self.seen.push(Observation {
            tick,
            cell,
            centre,
            value: value.clone(),
        });
    }
}

/// Ray caster that returns the same hit (or miss) for every screen point.
#[derive(Clone, Copy, Debug)]
pub struct FixedRayCaster {
    pub hit: Option<Position>,
}

impl FixedRayCaster {
    pub fn hitting(position: Position) -> Self {
        Self {
            hit: Some(position),
        }
    }

    pub fn missing() -> Self {
        Self { hit: None }
    }
}

impl RayCaster for FixedRayCaster {
    fn cast(&self, _screen: ScreenPoint) -> Option<Position> {
        self.hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_temperatures_are_seeded() {
        let mut a = random_temperatures(7, 0.0, 100.0);
        let mut b = random_temperatures(7, 0.0, 100.0);
        for i in 0..16 {
            let (x, y) = (a(i, 0), b(i, 0));
            assert_eq!(x, y);
            assert!((0.0..100.0).contains(&x.temperature));
        }
    }

    #[test]
    fn reference_geometry_is_8x8() {
        let g = reference_geometry();
        assert_eq!((g.width(), g.height()), (8, 8));
    }

    #[test]
    fn fixed_caster_ignores_screen_point() {
        let caster = FixedRayCaster::hitting(Position::new(1.0, 0.0, 2.0));
        assert_eq!(
            caster.cast(ScreenPoint::new(5.0, 5.0)),
            Some(Position::new(1.0, 0.0, 2.0))
        );
        assert_eq!(FixedRayCaster::missing().cast(ScreenPoint::new(0.0, 0.0)), None);
    }
}
