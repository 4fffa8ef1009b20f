//! The grid world: geometry, double-buffered state, and the tick loop.
//!
//! [`GridWorld`] is the primary user-facing API. A host drives it once per
//! frame:
//!
//! ```text
//! input thread ──submit()──▶ [injection queue] ─┐
//!                                               ▼
//! frame: step() = drain injections → propagator(read → write) → flip
//!        observe(observer)  (read-only, every cell)
//! ```
//!
//! # Ownership model
//!
//! `GridWorld` is [`Send`] (can be moved between threads) but not shared.
//! All mutating methods take `&mut self`, so no write can interleave with a
//! running pass. Other threads interact only through [`InjectionSender`].

use std::time::Instant;

use dualgrid_arena::PingPongStore;
use dualgrid_core::{
    Cell, CellData, CellObserver, Position, RayCaster, ScreenPoint, StepError, TickId,
};
use dualgrid_propagator::{Propagator, ReadView, StepContext, WriteMode, WriteView};
use dualgrid_space::{GridGeometry, Neighbours};

use crate::config::{ConfigError, WorldConfig};
use crate::ingress::{DrainReport, InjectionQueue, InjectionSender};
use crate::metrics::StepMetrics;

// Compile-time assertion: GridWorld is Send for any cell type.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check<T: CellData>() {
        assert_send::<GridWorld<T>>();
    }
};

/// A double-buffered simulation grid with a single propagator.
///
/// Created from a [`WorldConfig`] via [`new()`](GridWorld::new).
///
/// # Example
///
/// ```
/// use dualgrid_core::Cell;
/// use dualgrid_engine::{GridConfig, GridWorld, WorldConfig};
/// use dualgrid_propagators::{heat_injection, HeatData, HeatDiffusion};
///
/// let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
/// let mut world = GridWorld::new(config).unwrap();
/// world.init(|_, _| HeatData::ambient());
///
/// world.injection_sender().submit(heat_injection(Cell::new(3, 3))).unwrap();
/// world.apply_injections();
/// assert_eq!(world.get(3, 3).temperature, 42.0);
///
/// world.step().unwrap();
/// assert!(world.get(3, 3).temperature < 42.0);
/// ```
pub struct GridWorld<T: CellData> {
    geometry: GridGeometry,
    store: PingPongStore<T>,
    propagator: Box<dyn Propagator<T>>,
    injections: InjectionQueue<T>,
    tick_id: TickId,
    last_metrics: StepMetrics,
}

impl<T: CellData> GridWorld<T> {
    /// Create a world from a validated configuration.
    ///
    /// Both buffers start filled with `T::default()`; call
    /// [`init()`](Self::init) to seed them.
    pub fn new(config: WorldConfig<T>) -> Result<Self, ConfigError> {
        let geometry = config.validate()?;
        let store = PingPongStore::for_geometry(&geometry)?;
        log::debug!(
            "grid world created: {}x{} cells ({}x{} logical, scale {}, cell size {}), propagator '{}'",
            geometry.width(),
            geometry.height(),
            geometry.logical_width(),
            geometry.logical_height(),
            geometry.scale(),
            geometry.cell_size(),
            config.propagator.name(),
        );
        Ok(Self {
            geometry,
            store,
            propagator: config.propagator,
            injections: InjectionQueue::new(config.max_pending_injections),
            tick_id: TickId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    // ── Store access ───────────────────────────────────────────────

    /// Seed every cell of both buffers with `seed(x, y)`.
    pub fn init(&mut self, seed: impl FnMut(i32, i32) -> T) {
        self.store.init(seed);
    }

    /// Committed value of `(x, y)`, or `T::default()` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> T {
        self.store.get(x, y)
    }

    /// Write `value` into the next state. No-op if out of bounds.
    ///
    /// Visible after the next [`flip()`](Self::flip). Note that
    /// [`step()`](Self::step) hands the whole write buffer to the
    /// propagator, which may overwrite this value.
    pub fn set_write(&mut self, x: i32, y: i32, value: T) {
        self.store.set_write(x, y, value);
    }

    /// Write `value` straight into the committed state. No-op if out of
    /// bounds. Visible to the next [`get()`](Self::get).
    pub fn set_read_direct(&mut self, x: i32, y: i32, value: T) {
        self.store.set_read_direct(x, y, value);
    }

    /// Swap the read and write buffers without running the propagator.
    pub fn flip(&mut self) {
        self.store.flip();
    }

    /// The underlying store, read-only.
    pub fn store(&self) -> &PingPongStore<T> {
        &self.store
    }

    // ── Geometry ───────────────────────────────────────────────────

    /// Resolved grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Returns `true` if `(x, y)` is a valid cell.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.geometry.in_bounds(x, y)
    }

    /// In-bounds neighbours of `(x, y)` within `radius`, excluding the cell.
    pub fn neighbours(&self, x: i32, y: i32, radius: u32) -> Neighbours {
        self.geometry.neighbours(x, y, radius)
    }

    /// World position of the corner of `(x, y)`.
    pub fn cell_to_world(&self, x: i32, y: i32) -> Position {
        self.geometry.cell_to_world(x, y)
    }

    /// Cell containing `position`; not bounds-checked.
    pub fn world_to_cell(&self, position: Position) -> Cell {
        self.geometry.world_to_cell(position)
    }

    /// Cell under `screen`, as resolved by `caster`; not bounds-checked.
    pub fn screen_to_cell(&self, caster: &dyn RayCaster, screen: ScreenPoint) -> Option<Cell> {
        self.geometry.screen_to_cell(caster, screen)
    }

    // ── Injections ─────────────────────────────────────────────────

    /// A handle other threads can use to queue immediate writes.
    pub fn injection_sender(&self) -> InjectionSender<T> {
        self.injections.sender()
    }

    /// Injections waiting for the next drain.
    pub fn pending_injections(&self) -> usize {
        self.injections.len()
    }

    /// Apply the queued injections to the committed state now.
    ///
    /// [`step()`](Self::step) does this automatically before the pass.
    pub fn apply_injections(&mut self) -> DrainReport {
        let mut report = DrainReport::default();
        for injection in self.injections.drain() {
            let Cell { x, y } = injection.cell;
            if self
                .store
                .update_read_direct(x, y, |current| injection.apply(current))
            {
                report.applied += 1;
            } else {
                log::warn!("dropped injection at off-grid cell ({x}, {y})");
                report.dropped += 1;
            }
        }
        report
    }

    // ── Tick loop ──────────────────────────────────────────────────

    /// Run one tick: drain injections, run the propagator, flip.
    ///
    /// On propagator failure the tick is rolled back: the buffers are not
    /// flipped, the tick counter does not advance, and the committed state
    /// keeps the values it had after the injections were applied.
    pub fn step(&mut self) -> Result<StepMetrics, StepError> {
        let tick_start = Instant::now();
        let drained = self.apply_injections();
        let next_tick = self.tick_id.next();

        let mode = self.propagator.write_mode();
        if mode == WriteMode::Incremental {
            self.store.carry_forward();
        }

        let prop_start = Instant::now();
        let result = {
            let guard = self.store.begin_tick();
            let reads = ReadView::new(guard.read, &self.geometry);
            let writes = WriteView::new(guard.write, &self.geometry, mode, self.propagator.name());
            let mut ctx = StepContext::new(reads, writes, next_tick);
            let result = self.propagator.step(&mut ctx);
            if result.is_err() {
                ctx.writes().mark_complete();
            }
            result
        };
        let propagator_us = prop_start.elapsed().as_micros() as u64;

        if let Err(reason) = result {
            log::warn!(
                "tick {next_tick} rolled back: propagator '{}' failed: {reason}",
                self.propagator.name()
            );
            return Err(StepError::PropagatorFailed {
                name: self.propagator.name().to_string(),
                reason,
            });
        }

        self.store.flip();
        self.tick_id = next_tick;

        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            propagator_us,
            injections_applied: drained.applied,
            injections_dropped: drained.dropped,
            generation: self.store.generation(),
            memory_bytes: self.store.memory_bytes(),
        };
        log::trace!(
            "tick {} done in {}us (propagator {}us, {} injections)",
            self.tick_id,
            metrics.total_us,
            metrics.propagator_us,
            metrics.injections_applied
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Number of successful ticks so far.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Metrics of the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Name of the configured propagator.
    pub fn propagator_name(&self) -> &str {
        self.propagator.name()
    }

    // ── Observation ────────────────────────────────────────────────

    /// Show every committed cell to `observer`, once each, in canonical
    /// order.
    pub fn observe(&self, observer: &mut dyn CellObserver<T>) {
        let cells = self.geometry.canonical_ordering();
        for (cell, value) in cells.zip(self.store.read_slice()) {
            let centre = self.geometry.cell_center(cell.x, cell.y);
            observer.observe(self.tick_id, cell, centre, value);
        }
    }
}

impl<T: CellData> std::fmt::Debug for GridWorld<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridWorld")
            .field("geometry", &self.geometry)
            .field("propagator", &self.propagator.name())
            .field("tick_id", &self.tick_id)
            .field("pending_injections", &self.injections.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use dualgrid_core::{Injection, PropagatorError};
    use dualgrid_test_utils::{ConstPropagator, FailingPropagator, IdentityPropagator};

    fn world_with(prop: impl Propagator<f64>) -> GridWorld<f64> {
        GridWorld::new(WorldConfig::new(GridConfig::default(), prop)).unwrap()
    }

    #[test]
    fn new_world_is_default_filled() {
        let world = world_with(IdentityPropagator::new("id"));
        assert_eq!(world.tick_id(), TickId(0));
        assert_eq!(world.geometry().cell_count(), 64);
        assert!(world.store().read_slice().iter().all(|&v| v == 0.0));
        assert_eq!(world.propagator_name(), "id");
    }

    #[test]
    fn zero_queue_is_rejected() {
        let mut cfg: WorldConfig<f64> =
            WorldConfig::new(GridConfig::default(), IdentityPropagator::new("id"));
        cfg.max_pending_injections = 0;
        assert!(matches!(
            GridWorld::new(cfg),
            Err(ConfigError::InjectionQueueZero)
        ));
    }

    #[test]
    fn step_flips_and_advances_tick() {
        let mut world = world_with(ConstPropagator::new("const", 7.0));
        let metrics = world.step().unwrap();
        assert_eq!(world.tick_id(), TickId(1));
        assert_eq!(metrics.generation, 1);
        assert_eq!(world.get(4, 4), 7.0);
        assert_eq!(world.last_metrics(), &metrics);
    }

    #[test]
    fn failed_step_rolls_back() {
        let mut world = world_with(FailingPropagator::new("flaky", 1));
        world.init(|x, y| f64::from(x * 8 + y));
        let before = world.store().read_slice().to_vec();
        let read_index = world.store().read_index();

        world.step().unwrap();
        let after_first = world.store().read_slice().to_vec();
        assert_eq!(world.tick_id(), TickId(1));

        match world.step() {
            Err(StepError::PropagatorFailed { name, reason }) => {
                assert_eq!(name, "flaky");
                assert!(matches!(reason, PropagatorError::ExecutionFailed { .. }));
            }
            other => panic!("expected PropagatorFailed, got {other:?}"),
        }
        assert_eq!(world.tick_id(), TickId(1));
        assert_eq!(world.store().read_slice(), &after_first[..]);
        assert_ne!(world.store().read_index(), read_index);
        assert_eq!(before, after_first);
    }

    #[test]
    fn injections_apply_before_the_pass() {
        let mut world = world_with(IdentityPropagator::new("id"));
        let tx = world.injection_sender();
        tx.set(Cell::new(1, 2), 5.0).unwrap();
        tx.submit(Injection::update(Cell::new(1, 2), |v: f64| v * 2.0))
            .unwrap();
        tx.set(Cell::new(99, 0), 1.0).unwrap();
        assert_eq!(world.pending_injections(), 3);

        let metrics = world.step().unwrap();
        assert_eq!(metrics.injections_applied, 2);
        assert_eq!(metrics.injections_dropped, 1);
        assert_eq!(world.pending_injections(), 0);
        // The identity pass carried the injected value through the flip.
        assert_eq!(world.get(1, 2), 10.0);
    }

    #[test]
    fn apply_injections_is_immediate() {
        let mut world = world_with(IdentityPropagator::new("id"));
        world.injection_sender().set(Cell::new(0, 0), 3.0).unwrap();
        let report = world.apply_injections();
        assert_eq!(
            report,
            DrainReport {
                applied: 1,
                dropped: 0
            }
        );
        assert_eq!(world.get(0, 0), 3.0);
        assert_eq!(world.tick_id(), TickId(0));
    }

    #[test]
    fn manual_write_and_flip() {
        let mut world = world_with(IdentityPropagator::new("id"));
        world.set_write(2, 2, 4.0);
        assert_eq!(world.get(2, 2), 0.0);
        world.flip();
        assert_eq!(world.get(2, 2), 4.0);
        world.set_read_direct(2, 2, 6.0);
        assert_eq!(world.get(2, 2), 6.0);
        world.set_read_direct(-1, 2, 6.0);
        assert_eq!(world.get(-1, 2), 0.0);
    }

    #[test]
    fn geometry_surface_delegates() {
        let world = world_with(IdentityPropagator::new("id"));
        assert!(world.in_bounds(7, 7));
        assert!(!world.in_bounds(8, 0));
        assert_eq!(world.neighbours(0, 0, 1).count(), 3);
        assert_eq!(world.cell_to_world(4, 2), Position::new(1.0, 0.0, 0.5));
        assert_eq!(
            world.world_to_cell(Position::new(1.1, 0.0, 0.6)),
            Cell::new(4, 2)
        );
        let caster = |_: ScreenPoint| Some(Position::new(0.3, 0.0, 1.8));
        assert_eq!(
            world.screen_to_cell(&caster, ScreenPoint::new(0.0, 0.0)),
            Some(Cell::new(1, 7))
        );
    }

    struct Collect(Vec<(TickId, Cell, Position, f64)>);

    impl CellObserver<f64> for Collect {
        fn observe(&mut self, tick: TickId, cell: Cell, centre: Position, value: &f64) {
            self.0.push((tick, cell, centre, *value));
        }
    }

    #[test]
    fn observe_visits_every_cell_once() {
        let mut world = world_with(IdentityPropagator::new("id"));
        world.init(|x, y| f64::from(x * 10 + y));
        let mut seen = Collect(Vec::new());
        world.observe(&mut seen);
        assert_eq!(seen.0.len(), 64);
        let (tick, cell, centre, value) = seen.0[9];
        assert_eq!(tick, TickId(0));
        assert_eq!(cell, Cell::new(1, 1));
        assert_eq!(centre, Position::new(0.375, 0.0, 0.375));
        assert_eq!(value, 11.0);
    }
}
