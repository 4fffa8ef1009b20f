//! Neighbour-relaxation heat diffusion.
//!
//! Constructed via the builder pattern: [`HeatDiffusion::builder`].

use dualgrid_core::{Cell, PropagatorError};
use dualgrid_propagator::{Propagator, StepContext, WriteMode};

use crate::heat::HeatData;

/// Heat diffusion over a square neighbourhood.
///
/// For every cell, in canonical order, starting from the cell's tick-start
/// temperature `t`:
///
/// ```text
/// for n in neighbours(cell, radius):      // outer x, inner y
///     t = t - (t - prev[n]) * transfer_rate
/// next[cell] = t
/// ```
///
/// Each transfer is taken against the running value `t`, after the
/// transfers of earlier neighbours. Only the cell itself is updated;
/// each neighbour is updated on its own visit. Every neighbour value comes
/// from the tick-start buffer, so the result is independent of the order
/// in which cells are visited.
///
/// A uniform field is a fixed point: every cell keeps its temperature.
///
/// # Construction
///
/// ```
/// use dualgrid_propagators::HeatDiffusion;
///
/// let prop = HeatDiffusion::builder()
///     .transfer_rate(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(prop.transfer_rate(), 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct HeatDiffusion {
    transfer_rate: f64,
    radius: u32,
}

/// Builder for [`HeatDiffusion`].
///
/// Defaults: `transfer_rate` [`HeatDiffusion::DEFAULT_TRANSFER_RATE`],
/// `radius` 1.
pub struct HeatDiffusionBuilder {
    transfer_rate: f64,
    radius: u32,
}

impl HeatDiffusion {
    /// Reference transfer rate, the mean of two 25% conductances.
    pub const DEFAULT_TRANSFER_RATE: f64 = (0.25 + 0.25) / 2.0;

    /// Create a new builder for configuring a `HeatDiffusion` propagator.
    pub fn builder() -> HeatDiffusionBuilder {
        HeatDiffusionBuilder {
            transfer_rate: Self::DEFAULT_TRANSFER_RATE,
            radius: 1,
        }
    }

    /// Fraction of the temperature difference moved per neighbour per tick.
    pub fn transfer_rate(&self) -> f64 {
        self.transfer_rate
    }

    /// Neighbourhood radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    fn relax(&self, mut temperature: f64, neighbours: impl Iterator<Item = f64>) -> f64 {
        for neighbour in neighbours {
            let difference = (temperature - neighbour) * self.transfer_rate;
            temperature -= difference;
        }
        temperature
    }
}

impl Default for HeatDiffusion {
    fn default() -> Self {
        Self {
            transfer_rate: Self::DEFAULT_TRANSFER_RATE,
            radius: 1,
        }
    }
}

impl HeatDiffusionBuilder {
    /// Set the transfer rate. Must be finite and within `[0, 1]`.
    pub fn transfer_rate(mut self, rate: f64) -> Self {
        self.transfer_rate = rate;
        self
    }

    /// Set the neighbourhood radius. Must be at least 1.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Build the propagator.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `transfer_rate` is NaN, infinite, negative, or greater than 1
    /// - `radius` is 0
    pub fn build(self) -> Result<HeatDiffusion, String> {
        if !(0.0..=1.0).contains(&self.transfer_rate) {
            return Err(format!(
                "transfer_rate must be finite and within [0, 1], got {}",
                self.transfer_rate
            ));
        }
        if self.radius == 0 {
            return Err("radius must be at least 1".to_string());
        }
        Ok(HeatDiffusion {
            transfer_rate: self.transfer_rate,
            radius: self.radius,
        })
    }
}

impl Propagator<HeatData> for HeatDiffusion {
    fn name(&self) -> &str {
        "heat_diffusion"
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Full
    }

    fn step(&self, ctx: &mut StepContext<'_, HeatData>) -> Result<(), PropagatorError> {
        let prev = ctx.reads();
        let geometry = ctx.geometry();
        let out = ctx.writes();

        for (i, cell) in geometry.canonical_ordering().enumerate() {
            let Cell { x, y } = cell;
            let temperature = self.relax(
                prev.get(x, y).temperature,
                prev.neighbours(x, y, self.radius)
                    .map(|n| prev.get_cell(n).temperature),
            );
            if !temperature.is_finite() {
                return Err(PropagatorError::NonFinite { cell });
            }
            out.write_at(i, HeatData::new(temperature));
        }
        Ok(())
    }
}
