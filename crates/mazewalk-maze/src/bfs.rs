//! Breadth-first search, which finds a shortest route.

use mazewalk_list::{Queue, Stack};

use crate::geom::Point;
use crate::grid::{PATH, VISITED};
use crate::maze::Maze;
use crate::report::SearchReport;

/// A cell reached during the search, linked to the cell it was reached from.
#[derive(Debug, Clone, Copy)]
struct Step {
    pos: Point,
    parent: Option<usize>,
}

impl Maze {
    /// Explore the maze in rings of increasing distance from the start.
    ///
    /// Cells are marked visited as they leave the queue. Every cell records
    /// the one it was discovered from, and once the exit is dequeued the
    /// route is rebuilt by following those links back to the start. The
    /// route has the fewest possible moves.
    pub fn breadth_first_search(&mut self) -> SearchReport {
        let start = self.grid.start();
        log::debug!("breadth-first search from {start}");

        let mut trail = vec![Step {
            pos: start,
            parent: None,
        }];
        let mut discovered = vec![false; self.grid.len()];
        if let Some(i) = self.grid.index(start) {
            discovered[i] = true;
        }
        let mut frontier = Queue::new();
        frontier.enqueue(0);

        let exit = loop {
            let Ok(current) = frontier.dequeue() else {
                return self.no_exit();
            };
            let pos = trail[current].pos;
            if self.grid.is_exit(pos) {
                break current;
            }
            self.grid.set(pos, VISITED);

            for dir in self.config.neighbor_order.directions() {
                let next = pos.step(dir);
                let Some(i) = self.grid.index(next) else {
                    continue;
                };
                if discovered[i] || !self.grid.is_open_or_exit(next) {
                    continue;
                }
                discovered[i] = true;
                log::trace!("discovered {next} from {pos}");
                trail.push(Step {
                    pos: next,
                    parent: Some(current),
                });
                frontier.enqueue(trail.len() - 1);
            }
        };

        // Walking back from the exit leaves the start on top.
        let mut path = Stack::new();
        let mut cursor = Some(exit);
        while let Some(i) = cursor {
            let step = trail[i];
            self.grid.set(step.pos, PATH);
            path.push(step.pos);
            cursor = step.parent;
        }
        self.found(path)
    }
}
