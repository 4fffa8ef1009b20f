//! Per-tick performance metrics for a grid world.
//!
//! [`StepMetrics`] captures timing and bookkeeping for a single tick.

/// Timing and bookkeeping collected during a single tick.
///
/// All durations are in microseconds. The world populates these fields
/// after each successful `step()` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent in the propagator's `step()`, in microseconds.
    pub propagator_us: u64,
    /// Injections applied at the start of the tick.
    pub injections_applied: u64,
    /// Injections dropped at the start of the tick (off-grid targets).
    pub injections_dropped: u64,
    /// Store generation after the flip.
    pub generation: u64,
    /// Memory held by both cell buffers, in bytes.
    pub memory_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.propagator_us, 0);
        assert_eq!(m.injections_applied, 0);
        assert_eq!(m.injections_dropped, 0);
        assert_eq!(m.generation, 0);
        assert_eq!(m.memory_bytes, 0);
    }
}
