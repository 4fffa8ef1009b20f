//! [`GridGeometry`]: internal dimensions, coordinate mapping, bounds and
//! neighbourhoods.

use crate::error::SpaceError;
use crate::neighbours::{NeighbourWindow, Neighbours};
use dualgrid_core::{Cell, Position, RayCaster, ScreenPoint};

/// Flat buffer index of `(x, y)` in a `width × height` grid, or `None` if
/// the coordinate is out of bounds.
///
/// Layout is `x * height + y`, so the canonical traversal (outer `x`,
/// inner `y`) walks memory sequentially. This is the single place the
/// permissive boundary policy is decided: every buffer access resolves
/// its slot here, and a `None` becomes a default read or an ignored write.
#[inline]
pub fn flat_index(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return None;
    }
    Some(x as usize * height as usize + y as usize)
}

/// Map a world-space offset in cell units to a cell index.
///
/// `as` saturates infinities; NaN is pushed off-grid rather than
/// collapsing to cell 0.
#[inline]
fn floor_to_index(v: f32) -> i32 {
    if v.is_nan() {
        i32::MIN
    } else {
        v.floor() as i32
    }
}

/// The shape of a double-buffered grid.
///
/// Built from a *logical* grid request (dimensions, cell size) and a
/// subdivision `grid_scale`. Each logical cell is split into
/// `scale × scale` internal cells, where `scale = floor(cell_size / grid_scale)`:
///
/// ```text
/// width     = logical_width  * scale
/// height    = logical_height * scale
/// cell_size = requested_cell_size / scale
/// ```
///
/// Cells map onto the horizontal `x`/`z` plane of world space, anchored at
/// `origin`.
///
/// # Examples
///
/// ```
/// use dualgrid_core::{Cell, Position};
/// use dualgrid_space::GridGeometry;
///
/// let g = GridGeometry::new(2, 2, 0.25, 1.0, Position::ZERO).unwrap();
/// assert_eq!((g.width(), g.height(), g.scale()), (8, 8, 4));
/// assert_eq!(g.cell_size(), 0.25);
/// assert_eq!(g.world_to_cell(Position::new(0.6, 0.0, 1.9)), Cell::new(2, 7));
/// assert_eq!(g.neighbours(0, 0, 1).count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    width: u32,
    height: u32,
    cell_size: f32,
    scale: u32,
    origin: Position,
}

impl GridGeometry {
    /// Maximum internal dimension: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of `logical_width × logical_height` cells of side
    /// `cell_size`, each subdivided by `grid_scale`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either logical dimension is
    /// 0, `InvalidCellSize` / `InvalidScale` / `NonFiniteOrigin` for
    /// degenerate inputs (including a subdivision that floors to 0), and
    /// `DimensionTooLarge` if an internal dimension or the total cell count
    /// overflows.
    pub fn new(
        logical_width: u32,
        logical_height: u32,
        grid_scale: f32,
        cell_size: f32,
        origin: Position,
    ) -> Result<Self, SpaceError> {
        if logical_width == 0 || logical_height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SpaceError::InvalidCellSize { value: cell_size });
        }
        if !origin.is_finite() {
            return Err(SpaceError::NonFiniteOrigin);
        }
        let invalid_scale = SpaceError::InvalidScale {
            grid_scale,
            cell_size,
        };
        if !grid_scale.is_finite() || grid_scale <= 0.0 {
            return Err(invalid_scale);
        }

        let factor = (cell_size / grid_scale).floor();
        if factor < 1.0 {
            return Err(invalid_scale);
        }
        if factor > Self::MAX_DIM as f32 {
            return Err(SpaceError::DimensionTooLarge {
                name: "scale",
                value: factor as u64,
                max: u64::from(Self::MAX_DIM),
            });
        }
        let scale = factor as u32;

        let width = Self::scaled("width", logical_width, scale)?;
        let height = Self::scaled("height", logical_height, scale)?;
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(SpaceError::DimensionTooLarge {
                name: "cell_count",
                value: u64::from(width) * u64::from(height),
                max: usize::MAX as u64,
            })?;

        Ok(Self {
            width,
            height,
            cell_size: cell_size / scale as f32,
            scale,
            origin,
        })
    }

    /// A grid with no subdivision: `width × height` cells of side `cell_size`.
    pub fn unscaled(
        width: u32,
        height: u32,
        cell_size: f32,
        origin: Position,
    ) -> Result<Self, SpaceError> {
        Self::new(width, height, cell_size, cell_size, origin)
    }

    fn scaled(name: &'static str, logical: u32, scale: u32) -> Result<u32, SpaceError> {
        let value = u64::from(logical) * u64::from(scale);
        if value > u64::from(Self::MAX_DIM) {
            return Err(SpaceError::DimensionTooLarge {
                name,
                value,
                max: u64::from(Self::MAX_DIM),
            });
        }
        Ok(value as u32)
    }

    /// Internal width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Internal height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World-space side length of one internal cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Internal cells per logical cell along each axis.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// World position of cell `(0, 0)`.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Logical width as requested at construction.
    pub fn logical_width(&self) -> u32 {
        self.width / self.scale
    }

    /// Logical height as requested at construction.
    pub fn logical_height(&self) -> u32 {
        self.height / self.scale
    }

    /// Total number of internal cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Flat buffer index of `(x, y)`; see [`flat_index`].
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        flat_index(x, y, self.width, self.height)
    }

    /// World position of the `(x, y)` cell's corner: `(x, 0, y) * cell_size + origin`.
    ///
    /// Defined for any coordinate, including off-grid ones.
    pub fn cell_to_world(&self, x: i32, y: i32) -> Position {
        Position::new(x as f32, 0.0, y as f32) * self.cell_size + self.origin
    }

    /// World position of the centre of cell `(x, y)`.
    pub fn cell_center(&self, x: i32, y: i32) -> Position {
        self.cell_to_world(x, y) + Position::new(self.cell_size, 0.0, self.cell_size) * 0.5
    }

    /// Cell containing `position`.
    ///
    /// Not clamped: positions off the grid map to negative or too-large
    /// coordinates so callers can detect them with [`in_bounds`](Self::in_bounds).
    /// The vertical component is ignored.
    pub fn world_to_cell(&self, position: Position) -> Cell {
        let local = position - self.origin;
        Cell::new(
            floor_to_index(local.x / self.cell_size),
            floor_to_index(local.z / self.cell_size),
        )
    }

    /// Cell containing `position`, or `None` if it lies off the grid.
    pub fn world_to_cell_checked(&self, position: Position) -> Option<Cell> {
        let cell = self.world_to_cell(position);
        self.in_bounds(cell.x, cell.y).then_some(cell)
    }

    /// Resolve a screen point to a cell through an external ray caster.
    ///
    /// Returns `None` if the ray hits nothing. A hit outside the grid is
    /// returned as an off-grid coordinate, as with
    /// [`world_to_cell`](Self::world_to_cell).
    pub fn screen_to_cell(&self, caster: &dyn RayCaster, screen: ScreenPoint) -> Option<Cell> {
        caster.cast(screen).map(|hit| self.world_to_cell(hit))
    }

    /// Clipped window of `radius` around `(x, y)`.
    pub fn neighbour_window(&self, x: i32, y: i32, radius: u32) -> NeighbourWindow {
        NeighbourWindow::clipped(x, y, radius, self.width, self.height)
    }

    /// Every in-bounds cell within `radius` of `(x, y)` (Chebyshev distance),
    /// excluding `(x, y)` itself, in outer-`x`, inner-`y` order.
    pub fn neighbours(&self, x: i32, y: i32, radius: u32) -> Neighbours {
        Neighbours::new(self.neighbour_window(x, y, radius), Cell::new(x, y))
    }

    /// All cells in canonical order: outer loop over `x`, inner over `y`.
    ///
    /// The `n`-th cell yielded has flat index `n`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }
}
