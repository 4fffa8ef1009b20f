//! Write access to the next-state buffer, with debug-mode coverage tracking.
//!
//! [`WriteView`] wraps the mutable write buffer of a tick. For
//! [`WriteMode::Full`](crate::WriteMode) steps it tracks, in debug builds,
//! which cells have been written and logs a warning on drop if coverage is
//! incomplete. Release builds pay zero overhead.

use dualgrid_core::{Cell, CellData};
use dualgrid_space::{flat_index, GridGeometry};

use crate::propagator::WriteMode;

#[cfg(debug_assertions)]
struct CoverageTracker {
    written: Vec<bool>,
    propagator_name: String,
}

/// Mutable view of the write buffer for one tick.
///
/// Writes follow the same permissive bounds policy as the store:
/// out-of-bounds writes are dropped.
pub struct WriteView<'a, T> {
    data: &'a mut [T],
    width: u32,
    height: u32,
    #[cfg(debug_assertions)]
    tracker: Option<CoverageTracker>,
}

impl<'a, T: CellData> WriteView<'a, T> {
    /// Wrap `data`, laid out in canonical order for `geometry`.
    ///
    /// Coverage is tracked only for [`WriteMode::Full`]; `propagator_name`
    /// is used in the diagnostic.
    pub fn new(
        data: &'a mut [T],
        geometry: &GridGeometry,
        #[cfg_attr(not(debug_assertions), allow(unused_variables))] mode: WriteMode,
        #[cfg_attr(not(debug_assertions), allow(unused_variables))] propagator_name: &str,
    ) -> Self {
        debug_assert_eq!(data.len(), geometry.cell_count());
        Self {
            #[cfg(debug_assertions)]
            tracker: (mode == WriteMode::Full).then(|| CoverageTracker {
                written: vec![false; data.len()],
                propagator_name: propagator_name.to_string(),
            }),
            width: geometry.width(),
            height: geometry.height(),
            data,
        }
    }

    /// Write `value` at `(x, y)`. No-op if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = flat_index(x, y, self.width, self.height) {
            self.write_at(i, value);
        }
    }

    /// Write `value` at `cell`. No-op if out of bounds.
    pub fn set_cell(&mut self, cell: Cell, value: T) {
        self.set(cell.x, cell.y, value);
    }

    /// Write `value` at canonical index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn write_at(&mut self, index: usize, value: T) {
        self.data[index] = value;
        #[cfg(debug_assertions)]
        if let Some(tracker) = &mut self.tracker {
            tracker.written[index] = true;
        }
    }

    /// Current contents of `(x, y)` in the write buffer, or `T::default()`
    /// if out of bounds.
    ///
    /// Under [`WriteMode::Incremental`] this is the committed value until
    /// the step overwrites it.
    pub fn get(&self, x: i32, y: i32) -> T {
        flat_index(x, y, self.width, self.height)
            .map(|i| self.data[i])
            .unwrap_or_default()
    }

    /// The underlying slice for bulk writes.
    ///
    /// Marks ALL cells as written: the caller is assumed to fill it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.mark_complete();
        self.data
    }

    /// Number of cells in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fraction of cells written (always 1.0 in release builds or when
    /// coverage is not tracked).
    pub fn coverage(&self) -> f64 {
        #[cfg(debug_assertions)]
        if let Some(tracker) = &self.tracker {
            if tracker.written.is_empty() {
                return 1.0;
            }
            let count = tracker.written.iter().filter(|&&b| b).count();
            return count as f64 / tracker.written.len() as f64;
        }
        1.0
    }

    /// Explicitly mark every cell as written, suppressing the drop diagnostic.
    pub fn mark_complete(&mut self) {
        #[cfg(debug_assertions)]
        if let Some(tracker) = &mut self.tracker {
            tracker.written.fill(true);
        }
    }
}

#[cfg(debug_assertions)]
impl<T> Drop for WriteView<'_, T> {
    fn drop(&mut self) {
        let Some(tracker) = &self.tracker else {
            return;
        };
        let total = tracker.written.len();
        let count = tracker.written.iter().filter(|&&b| b).count();
        if count < total {
            log::warn!(
                "incomplete full write by propagator '{}': {}/{} cells written ({:.1}%)",
                tracker.propagator_name,
                count,
                total,
                (count as f64 / total as f64) * 100.0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualgrid_core::Position;

    fn geometry(w: u32, h: u32) -> GridGeometry {
        GridGeometry::unscaled(w, h, 1.0, Position::ZERO).unwrap()
    }

    #[test]
    fn full_coverage_reported() {
        let g = geometry(2, 2);
        let mut buf = vec![0.0f32; 4];
        let mut view = WriteView::new(&mut buf, &g, WriteMode::Full, "test");
        for x in 0..2 {
            for y in 0..2 {
                view.set(x, y, 1.0);
            }
        }
        assert_eq!(view.coverage(), 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn partial_coverage_detected() {
        let g = geometry(2, 2);
        let mut buf = vec![0.0f32; 4];
        let mut view = WriteView::new(&mut buf, &g, WriteMode::Full, "test");
        view.set(0, 0, 1.0);
        view.set(1, 1, 3.0);
        assert_eq!(view.coverage(), 0.5);
    }

    #[test]
    fn incremental_mode_is_untracked() {
        let g = geometry(2, 2);
        let mut buf = vec![0.0f32; 4];
        let view = WriteView::new(&mut buf, &g, WriteMode::Incremental, "test");
        assert_eq!(view.coverage(), 1.0);
    }

    #[test]
    fn out_of_bounds_set_is_dropped() {
        let g = geometry(2, 2);
        let mut buf = vec![0u8; 4];
        {
            let mut view = WriteView::new(&mut buf, &g, WriteMode::Incremental, "test");
            view.set(-1, 0, 9);
            view.set(0, 2, 9);
            view.set_cell(Cell::new(2, 0), 9);
            assert_eq!(view.get(-1, 0), 0);
        }
        assert_eq!(buf, vec![0, 0, 0, 0]);
    }

    #[test]
    fn writes_land_in_canonical_slots() {
        let g = geometry(3, 2);
        let mut buf = vec![0u8; 6];
        {
            let mut view = WriteView::new(&mut buf, &g, WriteMode::Incremental, "test");
            view.set(2, 1, 7);
            view.set(0, 1, 5);
            assert_eq!(view.get(2, 1), 7);
        }
        // index = x * height + y
        assert_eq!(buf, vec![0, 5, 0, 0, 0, 7]);
    }

    #[test]
    fn as_mut_slice_marks_complete() {
        let g = geometry(2, 2);
        let mut buf = vec![0.0f32; 4];
        let mut view = WriteView::new(&mut buf, &g, WriteMode::Full, "test");
        view.as_mut_slice().fill(1.0);
        assert_eq!(view.coverage(), 1.0);
    }

    #[test]
    fn mark_complete_suppresses_warning() {
        let g = geometry(2, 2);
        let mut buf = vec![0.0f32; 4];
        let mut view = WriteView::new(&mut buf, &g, WriteMode::Full, "test");
        view.write_at(0, 1.0);
        view.mark_complete();
        assert_eq!(view.coverage(), 1.0);
        assert_eq!(view.len(), 4);
        assert!(!view.is_empty());
    }
}
