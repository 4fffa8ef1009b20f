//! Integration tests for the reference heat model.
//!
//! These tests drive `HeatDiffusion` through a full `GridWorld`, not just
//! the propagator in isolation.

use dualgrid_core::{Cell, IngressError, Position, ScreenPoint};
use dualgrid_engine::{GridConfig, GridWorld, WorldConfig};
use dualgrid_propagators::{
    heat_injection, HeatData, HeatDiffusion, TemperatureLabels, AMBIENT_TEMPERATURE,
};
use dualgrid_test_utils::{
    random_temperatures, reference_geometry, FixedRayCaster, RecordingObserver,
};

fn reference_world() -> GridWorld<HeatData> {
    let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
    let mut world = GridWorld::new(config).unwrap();
    world.init(|_, _| HeatData::ambient());
    world
}

fn temperatures(world: &GridWorld<HeatData>) -> Vec<f64> {
    world.store().read_slice().iter().map(|h| h.temperature).collect()
}

#[test]
fn reference_world_is_8x8() {
    let world = reference_world();
    let g = world.geometry();
    assert_eq!((g.width(), g.height()), (8, 8));
    assert_eq!(g.cell_size(), 0.25);
    assert_eq!(g, &reference_geometry());
}

#[test]
fn uniform_world_stays_uniform() {
    let mut world = reference_world();
    world.step().unwrap();
    assert!(temperatures(&world).iter().all(|&t| t == AMBIENT_TEMPERATURE));
    for _ in 0..10 {
        world.step().unwrap();
    }
    assert!(temperatures(&world).iter().all(|&t| t == AMBIENT_TEMPERATURE));
}

#[test]
fn injection_is_visible_before_the_next_tick() {
    let mut world = reference_world();
    world
        .injection_sender()
        .submit(heat_injection(Cell::new(3, 3)))
        .unwrap();
    let report = world.apply_injections();
    assert_eq!(report.applied, 1);
    assert_eq!(world.get(3, 3).temperature, 42.0);
    assert_eq!(world.get(2, 3).temperature, 21.0);
}

#[test]
fn hotspot_cools_and_warms_every_neighbour() {
    let mut world = reference_world();
    world
        .injection_sender()
        .submit(heat_injection(Cell::new(3, 3)))
        .unwrap();
    let metrics = world.step().unwrap();
    assert_eq!(metrics.injections_applied, 1);

    let centre = world.get(3, 3).temperature;
    assert!(centre < 42.0 && centre > AMBIENT_TEMPERATURE);
    for n in world.neighbours(3, 3, 1) {
        let t = world.get(n.x, n.y).temperature;
        assert!(t > AMBIENT_TEMPERATURE, "{n} stayed at {t}");
    }
    // Two cells away nothing has moved yet.
    assert_eq!(world.get(1, 3).temperature, AMBIENT_TEMPERATURE);
    assert_eq!(world.get(5, 5).temperature, AMBIENT_TEMPERATURE);
}

#[test]
fn identical_worlds_evolve_bit_identically() {
    let run = || {
        let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
        let mut world = GridWorld::new(config).unwrap();
        world.init(random_temperatures(42, 0.0, 100.0));
        for _ in 0..50 {
            world.step().unwrap();
        }
        temperatures(&world)
            .into_iter()
            .map(f64::to_bits)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn thousand_ticks_stay_within_initial_range() {
    let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
    let mut world = GridWorld::new(config).unwrap();
    world.init(random_temperatures(7, 0.0, 100.0));
    let initial = temperatures(&world);
    let lo = initial.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = initial.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    for _ in 0..1000 {
        world.step().unwrap();
    }

    let last = temperatures(&world);
    assert!(last.iter().all(|t| t.is_finite() && *t >= lo && *t <= hi));
    let spread = last.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - last.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(spread < hi - lo, "diffusion did not smooth the field");
}

#[test]
fn pointer_input_heats_the_cell_under_the_ray() {
    let mut world = reference_world();
    let caster = FixedRayCaster::hitting(Position::new(0.6, 0.0, 1.9));
    let cell = world
        .screen_to_cell(&caster, ScreenPoint::new(320.0, 240.0))
        .unwrap();
    assert_eq!(cell, Cell::new(2, 7));
    assert!(world.in_bounds(cell.x, cell.y));

    world
        .injection_sender()
        .submit(heat_injection(cell))
        .unwrap();
    world.apply_injections();
    assert_eq!(world.get(2, 7).temperature, 42.0);

    assert_eq!(
        world.screen_to_cell(&FixedRayCaster::missing(), ScreenPoint::new(0.0, 0.0)),
        None
    );
}

#[test]
fn off_grid_injection_is_dropped() {
    let mut world = reference_world();
    world
        .injection_sender()
        .submit(heat_injection(Cell::new(-1, 0)))
        .unwrap();
    let metrics = world.step().unwrap();
    assert_eq!(metrics.injections_applied, 0);
    assert_eq!(metrics.injections_dropped, 1);
    assert!(temperatures(&world).iter().all(|&t| t == AMBIENT_TEMPERATURE));
}

#[test]
fn injections_from_another_thread_apply_at_next_step() {
    let mut world = reference_world();
    let tx = world.injection_sender();
    std::thread::spawn(move || {
        tx.submit(heat_injection(Cell::new(0, 0))).unwrap();
        tx.submit(heat_injection(Cell::new(7, 7))).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(world.get(0, 0).temperature, AMBIENT_TEMPERATURE);
    let metrics = world.step().unwrap();
    assert_eq!(metrics.injections_applied, 2);
    assert!(world.get(0, 0).temperature > AMBIENT_TEMPERATURE);
    assert!(world.get(7, 7).temperature > AMBIENT_TEMPERATURE);
}

#[test]
fn sender_outliving_world_reports_disconnect() {
    let world = reference_world();
    let tx = world.injection_sender();
    drop(world);
    assert_eq!(
        tx.submit(heat_injection(Cell::new(0, 0))),
        Err(IngressError::Disconnected)
    );
}

#[test]
fn observers_see_every_cell_once() {
    let mut world = reference_world();
    world.step().unwrap();

    let mut recorder = RecordingObserver::<HeatData>::new();
    world.observe(&mut recorder);
    assert_eq!(recorder.seen.len(), 64);
    assert!(recorder.seen.iter().all(|o| o.tick == world.tick_id()));
    assert_eq!(
        recorder.value_at(Cell::new(7, 0)),
        Some(&HeatData::ambient())
    );
    assert_eq!(recorder.value_at(Cell::new(8, 0)), None);

    recorder.clear();
    world.observe(&mut recorder);
    assert_eq!(recorder.seen.len(), 64);

    let mut labels = TemperatureLabels::new();
    world.observe(&mut labels);
    world.observe(&mut labels);
    assert_eq!(labels.len(), 64);
    assert!(labels.iter().all(|(_, _, text)| text == "21"));
    let (_, anchor, _) = labels.iter().next().unwrap();
    assert_eq!(anchor, Position::new(0.125, 0.0, 0.125));
}
