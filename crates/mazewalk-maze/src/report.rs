//! The outcome of one search, renderable as a text report.

use std::fmt;

use crate::geom::Point;

/// What a search produced, together with the grid as it looked afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchReport {
    /// A route from `start` to `exit`, both included in `path`.
    Found {
        start: Point,
        exit: Point,
        path: Vec<Point>,
        grid: String,
    },
    /// The frontier ran dry before reaching an exit.
    NoExit { grid: String },
}

impl SearchReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The route in travel order, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoExit { .. } => None,
        }
    }

    /// Number of moves along the route (one less than its cell count).
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    pub fn exit(&self) -> Option<Point> {
        match self {
            Self::Found { exit, .. } => Some(*exit),
            Self::NoExit { .. } => None,
        }
    }

    /// The grid rendering captured when the search finished.
    pub fn grid(&self) -> &str {
        match self {
            Self::Found { grid, .. } | Self::NoExit { grid } => grid,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found {
                start,
                exit,
                path,
                grid,
            } => {
                writeln!(
                    f,
                    "Path to follow from Start {start} to Exit {exit} - {} steps:",
                    path.len().saturating_sub(1)
                )?;
                for p in path {
                    writeln!(f, "{p}")?;
                }
                f.write_str(grid)
            }
            Self::NoExit { grid } => write!(f, "No exit found in maze!\n\n{grid}"),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let report = SearchReport::Found {
            start: Point::new(1, 1),
            exit: Point::new(1, 2),
            path: vec![Point::new(1, 1), Point::new(1, 2)],
            grid: "W.E".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
