//! Heat grid demo: heat a few cells and print the temperature labels.
//!
//! A 2×2 world of unit cells is split into 4×4 internal cells. A stand-in
//! pointer ray heats the cell it hits on every frame, diffusion spreads the
//! heat, and the labels are printed as an 8×8 table.
//!
//! Run with:
//!   cargo run --example heat_grid

use dualgrid::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = WorldConfig::new(GridConfig::default(), HeatDiffusion::default());
    let mut world = GridWorld::new(config)?;
    world.init(|_, _| HeatData::ambient());

    let g = world.geometry();
    println!(
        "{}x{} cells of {} world units ({} propagator)",
        g.width(),
        g.height(),
        g.cell_size(),
        world.propagator_name()
    );

    // The pointer always lands on the same world position.
    let pointer = |_: ScreenPoint| Some(Position::new(0.6, 0.0, 1.9));
    let tx = world.injection_sender();
    let mut labels = TemperatureLabels::new();

    for frame in 0..10 {
        if frame % 3 == 0 {
            if let Some(cell) = world.screen_to_cell(&pointer, ScreenPoint::new(320.0, 240.0)) {
                tx.submit(heat_injection(cell))?;
            }
        }
        let metrics = world.step()?;
        world.observe(&mut labels);
        println!(
            "tick {:>2}: {} injected, {} us",
            world.tick_id().0,
            metrics.injections_applied,
            metrics.total_us
        );
    }

    println!();
    let g = world.geometry();
    for y in (0..g.height() as i32).rev() {
        let row: Vec<String> = (0..g.width() as i32)
            .map(|x| format!("{:>4}", labels.label(Cell::new(x, y)).unwrap_or("?")))
            .collect();
        println!("{}", row.join(""));
    }
    Ok(())
}
