//! Cell coordinates and world-space positions.
//!
//! A [`Cell`] addresses one entry of the grid in integer cell units. It is
//! deliberately signed: mapping a world position that lies off the grid
//! produces negative or overflowing coordinates, which callers detect with
//! a bounds check rather than an error.
//!
//! A [`Position`] is a point in the 3D world the grid is embedded in. The
//! grid occupies the horizontal `x`/`z` plane; `y` is the vertical axis.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// An `(x, y)` cell coordinate, 0-indexed.
///
/// Valid iff `0 <= x < width` and `0 <= y < height` for the grid it is
/// used with. The same coordinate is used for buffer indexing and for
/// world-position mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column along the world `x` axis.
    pub x: i32,
    /// Row along the world `z` axis.
    pub y: i32,
}

impl Cell {
    /// Construct a cell coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal axis mapped from cell `x`.
    pub x: f32,
    /// Vertical axis. Always 0 for positions produced by the grid.
    pub y: f32,
    /// Horizontal axis mapped from cell `y`.
    pub z: f32,
}

impl Position {
    /// The world origin.
    pub const ZERO: Position = Position::new(0.0, 0.0, 0.0);

    /// Construct a position.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Position {
    type Output = Position;

    fn mul(self, rhs: f32) -> Position {
        Position::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A point on the viewer's screen, in pixels.
///
/// Only meaningful to a [`RayCaster`](crate::RayCaster); the grid never
/// interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

impl ScreenPoint {
    /// Construct a screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
