//! The [`Grid`] type: a fixed-size character matrix with a starting point.
//!
//! Searches write their bookkeeping straight into the cells ([`VISITED`],
//! [`PATH`]), except on the exit, which always keeps reading [`EXIT`].

use std::fmt;

use crate::error::MazeError;
use crate::geom::Point;

/// Walkable space.
pub const OPEN: char = ' ';
pub const WALL: char = 'W';
pub const EXIT: char = 'E';
/// Marker left on cells a search has explored.
pub const VISITED: char = 'V';
/// Marker left on cells of the reported path.
pub const PATH: char = '.';

const LEGAL: [char; 5] = [OPEN, WALL, EXIT, VISITED, PATH];

/// A rectangular maze of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: i32,
    columns: i32,
    start: Point,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// # Errors
    ///
    /// [`MazeError::InvalidConfiguration`] if the matrix is empty, ragged,
    /// larger than `i32::MAX` cells, or holds a character other than `' '`,
    /// `'W'`, `'E'`, `'V'` or `'.'`. Also if `start` is outside the grid, on
    /// a wall, or on the exit.
    pub fn new(start: Point, rows: Vec<Vec<char>>) -> Result<Self, MazeError> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(reject("maze has no cells".to_string()));
        }
        let (row_count, column_count) = dimensions(rows.len(), columns)?;
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(reject(format!(
                    "row {r} has {} cells, expected {columns}",
                    row.len()
                )));
            }
            if let Some((c, &ch)) = row.iter().enumerate().find(|&(_, ch)| !LEGAL.contains(ch)) {
                return Err(reject(format!("illegal cell {ch:?} at [{r}, {c}]")));
            }
            cells.extend_from_slice(row);
        }

        let grid = Self {
            cells,
            rows: row_count,
            columns: column_count,
            start,
        };
        match grid.at(start) {
            None => Err(reject(format!("starting point {start} is outside the maze"))),
            Some(WALL) => Err(reject(format!("starting point {start} is in a wall"))),
            Some(EXIT) => Err(reject(format!("starting point {start} is the exit"))),
            Some(_) => Ok(grid),
        }
    }

    /// Build a grid from string rows, one character per cell.
    pub fn from_lines<S: AsRef<str>>(start: Point, lines: &[S]) -> Result<Self, MazeError> {
        let rows = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
        Self::new(start, rows)
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.column >= 0 && p.row < self.rows && p.column < self.columns
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.columns as usize + p.column as usize)
    }

    /// The character at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `p`. No-op outside the grid and on the exit.
    pub fn set(&mut self, p: Point, ch: char) {
        if let Some(i) = self.index(p) {
            if self.cells[i] != EXIT {
                self.cells[i] = ch;
            }
        }
    }

    #[inline]
    pub fn is_exit(&self, p: Point) -> bool {
        self.at(p) == Some(EXIT)
    }

    /// Whether a search may step onto `p`: inside the grid and either open
    /// space or the exit.
    #[inline]
    pub fn is_open_or_exit(&self, p: Point) -> bool {
        matches!(self.at(p), Some(OPEN | EXIT))
    }

    /// One row of cells, or `None` past the last row.
    pub fn row(&self, r: i32) -> Option<&[char]> {
        if r < 0 || r >= self.rows {
            return None;
        }
        let w = self.columns as usize;
        let begin = r as usize * w;
        Some(&self.cells[begin..begin + w])
    }

    /// Iterate over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.columns as usize)
    }
}

/// Row and column counts as coordinates. The cell count must fit in an
/// `i32` so every flat index is addressable by a `Point`.
fn dimensions(rows: usize, columns: usize) -> Result<(i32, i32), MazeError> {
    let fits = rows
        .checked_mul(columns)
        .is_some_and(|cells| i32::try_from(cells).is_ok());
    match (i32::try_from(rows), i32::try_from(columns)) {
        (Ok(r), Ok(c)) if fits => Ok((r, c)),
        _ => Err(reject(format!("{rows}x{columns} maze is too large"))),
    }
}

fn reject(reason: String) -> MazeError {
    log::warn!("rejected maze: {reason}");
    MazeError::InvalidConfiguration(reason)
}

impl fmt::Display for Grid {
    /// Rows joined by `'\n'`, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
