//! Depth-first search with backtracking.

use mazewalk_list::Stack;

use crate::grid::{PATH, VISITED};
use crate::maze::Maze;
use crate::report::SearchReport;

impl Maze {
    /// Walk the maze depth-first from the start until the exit is reached
    /// or every reachable cell has been tried.
    ///
    /// The frontier stack always holds the current route from the start to
    /// its top. Each round steps into the first walkable neighbour (in the
    /// configured order), marking it visited, or backtracks by popping when
    /// there is none. On success the route is marked with `'.'` and kept for
    /// [`path_to_follow`](Self::path_to_follow). The route is some path to
    /// the exit, not necessarily a shortest one.
    pub fn depth_first_search(&mut self) -> SearchReport {
        let start = self.grid.start();
        log::debug!("depth-first search from {start}");

        let mut frontier = Stack::new();
        frontier.push(start);
        self.grid.set(start, VISITED);

        loop {
            let Ok(&top) = frontier.top() else {
                return self.no_exit();
            };
            if self.grid.is_exit(top) {
                break;
            }
            let next = self.open_neighbors(top).next();
            match next {
                Some(next) => {
                    log::trace!("step {top} -> {next}");
                    frontier.push(next);
                    self.grid.set(next, VISITED);
                }
                None => {
                    if let Ok(dead_end) = frontier.pop() {
                        log::trace!("backtrack from {dead_end}");
                    }
                }
            }
        }

        // Reversing the frontier puts the start back on top.
        let mut path = Stack::new();
        while let Ok(p) = frontier.pop() {
            self.grid.set(p, PATH);
            path.push(p);
        }
        self.found(path)
    }
}
