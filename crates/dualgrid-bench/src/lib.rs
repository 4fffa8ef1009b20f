//! Benchmark profiles and utilities for the dualgrid simulation framework.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) of heat diffusion
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//! - [`seeded_world`]: a world built from a profile and filled with
//!   deterministic random temperatures

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dualgrid_core::Position;
use dualgrid_engine::{ConfigError, GridConfig, GridWorld, WorldConfig};
use dualgrid_propagators::{HeatData, HeatDiffusion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a heat profile of `logical × logical` unit cells, each split into
/// 4×4 internal cells.
fn heat_profile(logical: u32) -> WorldConfig<HeatData> {
    WorldConfig::new(
        GridConfig {
            logical_width: logical,
            logical_height: logical,
            grid_scale: 0.25,
            cell_size: 1.0,
            origin: Position::ZERO,
        },
        HeatDiffusion::default(),
    )
}

/// Build a reference benchmark profile: 100x100 internal cells (10K).
pub fn reference_profile() -> WorldConfig<HeatData> {
    heat_profile(25)
}

/// Build a stress benchmark profile: 316x316 internal cells (~100K).
pub fn stress_profile() -> WorldConfig<HeatData> {
    heat_profile(79)
}

/// Construct a world from `config` with temperatures drawn uniformly from
/// `[0, 100)` by a ChaCha8 generator seeded with `seed`.
pub fn seeded_world(
    config: WorldConfig<HeatData>,
    seed: u64,
) -> Result<GridWorld<HeatData>, ConfigError> {
    let mut world = GridWorld::new(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    world.init(|_, _| HeatData::new(rng.random_range(0.0..100.0)));
    Ok(world)
}
