//! [`Maze`]: a grid plus the state of its most recent search.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mazewalk_list::Stack;

use crate::config::SearchConfig;
use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::Grid;
use crate::report::SearchReport;

/// Pathfinding engine over one [`Grid`].
///
/// The search methods live in their own modules
/// ([`depth_first_search`](Self::depth_first_search),
/// [`breadth_first_search`](Self::breadth_first_search)). Both mark the grid
/// as they go, so a second search on the same maze sees the first one's
/// markers.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) grid: Grid,
    pub(crate) config: SearchConfig,
    /// Last successful route, start on top.
    pub(crate) path: Option<Stack<Point>>,
}

impl Maze {
    /// Wrap `grid` with the default [`SearchConfig`].
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            path: None,
        }
    }

    /// Build from a starting cell and rows of characters.
    ///
    /// # Errors
    ///
    /// See [`Grid::new`].
    pub fn from_rows(
        start_row: i32,
        start_column: i32,
        rows: Vec<Vec<char>>,
    ) -> Result<Self, MazeError> {
        Grid::new(Point::new(start_row, start_column), rows).map(Self::new)
    }

    /// Read a text description from `path`, in the format accepted by
    /// `Grid`'s `FromStr` impl.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        log::debug!("loading maze from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.grid.start()
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A copy of the last route found, start on top so that iterating it
    /// walks from start to exit.
    ///
    /// # Errors
    ///
    /// [`MazeError::NotSearched`] unless the latest search found an exit.
    pub fn path_to_follow(&self) -> Result<Stack<Point>, MazeError> {
        self.path.clone().ok_or(MazeError::NotSearched)
    }

    /// Neighbours of `p` a search may enter, in configured order.
    pub(crate) fn open_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.config
            .neighbor_order
            .directions()
            .into_iter()
            .map(move |d| p.step(d))
            .filter(move |&n| self.grid.is_open_or_exit(n))
    }

    /// Store `path` (start on top) and report it.
    pub(crate) fn found(&mut self, path: Stack<Point>) -> SearchReport {
        let route: Vec<Point> = path.iter().copied().collect();
        let start = self.grid.start();
        let exit = route.last().copied().unwrap_or(start);
        log::debug!(
            "reached exit {exit} from {start} in {} steps",
            route.len().saturating_sub(1)
        );
        self.path = Some(path);
        SearchReport::Found {
            start,
            exit,
            path: route,
            grid: self.grid.to_string(),
        }
    }

    pub(crate) fn no_exit(&mut self) -> SearchReport {
        log::debug!("no exit reachable from {}", self.grid.start());
        self.path = None;
        SearchReport::NoExit {
            grid: self.grid.to_string(),
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        s.parse::<Grid>().map(Self::new)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
