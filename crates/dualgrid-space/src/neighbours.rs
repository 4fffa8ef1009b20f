//! Clipped square neighbour windows.
//!
//! The neighbourhood of a cell is the square `[x - r, x + r] × [y - r, y + r]`
//! clipped to the grid, minus the cell itself. Enumeration order is fixed:
//! outer loop over `x` ascending, inner loop over `y` ascending. Simulations
//! rely on this order for reproducibility, so it must not change.

use dualgrid_core::Cell;

/// Inclusive, already-clipped bounds of a neighbour window.
///
/// Empty when the centre lies so far off the grid that the window does not
/// overlap it (`min > max` on some axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighbourWindow {
    /// Smallest `x` in the window.
    pub min_x: i32,
    /// Largest `x` in the window.
    pub max_x: i32,
    /// Smallest `y` in the window.
    pub min_y: i32,
    /// Largest `y` in the window.
    pub max_y: i32,
}

impl NeighbourWindow {
    /// Window of `radius` around `(x, y)` clipped to `[0, width) × [0, height)`.
    pub fn clipped(x: i32, y: i32, radius: u32, width: u32, height: u32) -> Self {
        let r = radius.min(i32::MAX as u32) as i32;
        let last_x = width.min(i32::MAX as u32) as i32 - 1;
        let last_y = height.min(i32::MAX as u32) as i32 - 1;
        Self {
            min_x: x.saturating_sub(r).max(0),
            max_x: x.saturating_add(r).min(last_x),
            min_y: y.saturating_sub(r).max(0),
            max_y: y.saturating_add(r).min(last_y),
        }
    }

    /// Returns `true` if the window contains no cells.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Number of cells covered by the window, including the centre if it
    /// lies inside.
    pub fn area(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = (self.max_x as i64 - self.min_x as i64 + 1) as usize;
        let h = (self.max_y as i64 - self.min_y as i64 + 1) as usize;
        w * h
    }

    /// Returns `true` if `cell` lies inside the window.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    fn first(&self) -> Option<Cell> {
        if self.is_empty() {
            None
        } else {
            Some(Cell::new(self.min_x, self.min_y))
        }
    }

    fn successor(&self, c: Cell) -> Option<Cell> {
        if c.y < self.max_y {
            Some(Cell::new(c.x, c.y + 1))
        } else if c.x < self.max_x {
            Some(Cell::new(c.x + 1, self.min_y))
        } else {
            None
        }
    }
}

/// Lazy iterator over the neighbours of a cell.
///
/// Produced by [`GridGeometry::neighbours`](crate::GridGeometry::neighbours).
/// Computed fresh on every call; nothing is cached.
#[derive(Clone, Debug)]
pub struct Neighbours {
    window: NeighbourWindow,
    centre: Cell,
    next: Option<Cell>,
    remaining: usize,
}

impl Neighbours {
    pub(crate) fn new(window: NeighbourWindow, centre: Cell) -> Self {
        let remaining = window.area() - usize::from(window.contains(centre));
        Self {
            window,
            centre,
            next: window.first(),
            remaining,
        }
    }

    /// The clipped window being enumerated.
    pub fn window(&self) -> NeighbourWindow {
        self.window
    }
}

impl Iterator for Neighbours {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            let cur = self.next?;
            self.next = self.window.successor(cur);
            if cur != self.centre {
                self.remaining -= 1;
                return Some(cur);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Neighbours {}

impl std::iter::FusedIterator for Neighbours {}
