//! Drives the shared test fixtures through hand-built step contexts.

use dualgrid_core::{Position, PropagatorError, TickId};
use dualgrid_propagator::{Propagator, ReadView, StepContext, WriteMode, WriteView};
use dualgrid_space::GridGeometry;
use dualgrid_test_utils::{ConstPropagator, FailingPropagator, IdentityPropagator};

fn run<P: Propagator<f32>>(
    prop: &P,
    g: &GridGeometry,
    read: &[f32],
    write: &mut [f32],
) -> Result<(), PropagatorError> {
    let mut ctx = StepContext::new(
        ReadView::new(read, g),
        WriteView::new(write, g, prop.write_mode(), prop.name()),
        TickId(1),
    );
    let result = prop.step(&mut ctx);
    ctx.writes().mark_complete();
    result
}

fn geometry() -> GridGeometry {
    GridGeometry::unscaled(3, 2, 1.0, Position::ZERO).unwrap()
}

#[test]
fn identity_copies_reads() {
    let g = geometry();
    let read = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut write = [0.0; 6];
    run(&IdentityPropagator::new("id"), &g, &read, &mut write).unwrap();
    assert_eq!(write, read);
}

#[test]
fn const_ignores_reads() {
    let g = geometry();
    let read = [1.0; 6];
    let mut write = [0.0; 6];
    let prop = ConstPropagator::new("seven", 7.0f32);
    assert_eq!(prop.write_mode(), WriteMode::Full);
    run(&prop, &g, &read, &mut write).unwrap();
    assert!(write.iter().all(|&v| v == 7.0));
}

#[test]
fn failing_succeeds_then_fails() {
    let g = geometry();
    let read = [1.0; 6];
    let mut write = [3.0; 6];
    let prop = FailingPropagator::<f32>::new("flaky", 2);
    assert_eq!(prop.write_mode(), WriteMode::Incremental);

    run(&prop, &g, &read, &mut write).unwrap();
    run(&prop, &g, &read, &mut write).unwrap();
    assert_eq!(write, [3.0; 6]);

    let err = run(&prop, &g, &read, &mut write).unwrap_err();
    assert!(matches!(err, PropagatorError::ExecutionFailed { .. }));
    assert_eq!(write, [0.0; 6]);
    assert_eq!(prop.calls(), 3);

    prop.reset();
    assert_eq!(prop.calls(), 0);
    run(&prop, &g, &read, &mut write).unwrap();
}
