//! Maze solving on character grids.
//!
//! A maze is a rectangle of cells, each open (`' '`), a wall (`'W'`) or an
//! exit (`'E'`), plus a starting cell. [`Maze`] runs two searches over it:
//!
//! - **Depth-first** with backtracking ([`Maze::depth_first_search`]), which
//!   finds some route
//! - **Breadth-first** ([`Maze::breadth_first_search`]), which finds a route
//!   with the fewest moves
//!
//! Both leave their marks on the grid: `'V'` on explored cells and `'.'` on
//! the route. The outcome is a [`SearchReport`], and the route can also be
//! read back as a [`Stack`] with [`Maze::path_to_follow`].
//!
//! Mazes can be built from rows ([`Grid::new`], [`Maze::from_rows`]) or
//! parsed from text (`str::parse`, [`Maze::load`]).

mod bfs;
mod config;
mod dfs;
mod error;
mod geom;
mod grid;
mod maze;
mod parse;
mod report;

pub use config::{NeighborOrder, SearchConfig};
pub use error::MazeError;
pub use geom::{Direction, Point};
pub use grid::{EXIT, Grid, OPEN, PATH, VISITED, WALL};
pub use maze::Maze;
pub use mazewalk_list::Stack;
pub use parse::MAX_CELLS;
pub use report::SearchReport;
