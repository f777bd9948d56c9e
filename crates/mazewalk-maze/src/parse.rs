//! Text descriptions of a maze.
//!
//! ```text
//! <rows> <columns>
//! <start row> <start column>
//! <row 0>
//! ...
//! ```
//!
//! Rows shorter than `columns` are padded with open cells, since editors
//! tend to strip trailing spaces. Blank lines after the last row are
//! ignored. A description may declare at most [`MAX_CELLS`] cells.

use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::{Grid, OPEN};

/// Largest `rows * columns` a text description may declare.
pub const MAX_CELLS: usize = 1 << 24;

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        let mut lines = s.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (rows, columns) = header_pair(lines.next(), 1, "dimensions")?;
        if rows.checked_mul(columns).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(MazeError::Parse {
                line: 1,
                reason: format!("{rows}x{columns} exceeds the {MAX_CELLS} cell limit"),
            });
        }
        let (start_row, start_column) = header_pair(lines.next(), 2, "starting point")?;

        let mut grid_rows = Vec::new();
        for expected in 0..rows {
            let Some((line, text)) = lines.next() else {
                return Err(MazeError::Parse {
                    line: expected + 3,
                    reason: format!("expected {rows} grid rows, found {expected}"),
                });
            };
            let mut row: Vec<char> = text.chars().collect();
            if row.len() > columns {
                return Err(MazeError::Parse {
                    line,
                    reason: format!("row has {} cells, expected {columns}", row.len()),
                });
            }
            row.resize(columns, OPEN);
            grid_rows.push(row);
        }

        if let Some((line, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
            return Err(MazeError::Parse {
                line,
                reason: "unexpected content after the last grid row".to_string(),
            });
        }

        let start = Point::new(to_coord(start_row, 2)?, to_coord(start_column, 2)?);
        Grid::new(start, grid_rows)
    }
}

/// Parse a header line holding exactly two non-negative integers.
fn header_pair(
    entry: Option<(usize, &str)>,
    line: usize,
    what: &str,
) -> Result<(usize, usize), MazeError> {
    let Some((_, text)) = entry else {
        return Err(MazeError::Parse {
            line,
            reason: format!("missing {what} line"),
        });
    };
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [a, b] = fields[..] else {
        return Err(MazeError::Parse {
            line,
            reason: format!("expected two numbers for the {what}, found {:?}", text),
        });
    };
    let parse = |field: &str| {
        field.parse::<usize>().map_err(|e| MazeError::Parse {
            line,
            reason: format!("invalid {what} value {field:?}: {e}"),
        })
    };
    Ok((parse(a)?, parse(b)?))
}

fn to_coord(v: usize, line: usize) -> Result<i32, MazeError> {
    i32::try_from(v).map_err(|_| MazeError::Parse {
        line,
        reason: format!("coordinate {v} is too large"),
    })
}
