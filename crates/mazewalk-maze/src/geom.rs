//! Grid coordinates and the four cardinal directions.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow downward, columns grow to the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a point shifted by (`dr`, `dc`).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            column: self.column + dc,
        }
    }

    /// The neighbouring point one step towards `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.row, d.column)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.row - other.row).abs() + (self.column - other.column).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal direction on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    South,
    East,
    West,
    North,
}

impl Direction {
    /// Unit offset as a `Point`.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::South => Point::new(1, 0),
            Self::East => Point::new(0, 1),
            Self::West => Point::new(0, -1),
            Self::North => Point::new(-1, 0),
        }
    }
}
