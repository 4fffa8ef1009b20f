//! Reference propagators for the dualgrid simulation framework.
//!
//! The reference model is heat transfer over a grid of [`HeatData`] cells:
//!
//! 1. [`HeatDiffusion`] moves every cell's temperature towards its
//!    neighbours' tick-start temperatures.
//! 2. [`heat_injection`] builds the immediate-write command that adds a
//!    fixed amount of heat to one cell, typically in response to input.
//! 3. [`TemperatureLabels`] observes the committed grid and keeps one
//!    display label per cell, formatted by [`temperature_label`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod diffusion;
pub mod heat;

pub use diffusion::{HeatDiffusion, HeatDiffusionBuilder};
pub use heat::{
    heat_injection, temperature_label, HeatData, TemperatureLabels, AMBIENT_TEMPERATURE,
    HEAT_INJECTION_AMOUNT,
};
