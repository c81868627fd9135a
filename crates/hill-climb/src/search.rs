//! Breadth-first shortest-path search over a grid.
//!
//! The search expands in synchronous rounds: every cell in the frontier sits
//! at the same distance from the start set, so the round in which a goal cell
//! is first seen is its shortest distance. Edges all cost one step, which is
//! why no priority queue is needed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::grid::{Cell, Elevation, Grid};

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Cells that entered the visited set, seeds included
    pub cells_visited: usize,
    /// Frontiers that were checked against the goal
    pub rounds: usize,
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Fewest legal steps to a goal, `None` when no goal is reachable
    pub distance: Option<usize>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Cells whose minimal distance is already known
#[derive(Debug, Clone)]
pub struct VisitedSet {
    rows: usize,
    cols: usize,
    seen: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            seen: vec![false; grid.len()],
            count: 0,
        }
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    /// Mark `cell` visited. Returns `false` if it already was, or if it lies
    /// outside the grid this set was built for.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let Some(index) = self.index_of(cell) else {
            return false;
        };
        if self.seen[index] {
            return false;
        }
        self.seen[index] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|index| self.seen[index])
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Find the fewest legal steps from any cell in `starts` to a cell accepted
/// by `is_goal`.
///
/// `is_legal_step(from, to)` receives the elevations of the current cell and
/// the neighbour being considered. Start cells outside the grid are ignored.
pub fn shortest_path<S, G, L>(grid: &Grid, starts: S, is_goal: G, is_legal_step: L) -> SearchOutcome
where
    S: IntoIterator<Item = Cell>,
    G: Fn(Cell) -> bool,
    L: Fn(Elevation, Elevation) -> bool,
{
    let mut visited = VisitedSet::new(grid);
    let mut frontier: Vec<Cell> = Vec::new();

    for cell in starts {
        if !grid.contains(cell) {
            warn!(?cell, "start cell outside grid, skipping");
            continue;
        }
        if visited.insert(cell) {
            frontier.push(cell);
        }
    }

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        seeds = frontier.len(),
        "starting breadth-first search"
    );

    let mut stats = SearchStats::default();
    let mut distance = 0;

    while !frontier.is_empty() {
        stats.rounds += 1;
        trace!(distance, frontier = frontier.len(), "expanding round");

        if frontier.iter().any(|&cell| is_goal(cell)) {
            stats.cells_visited = visited.len();
            debug!(distance, ?stats, "goal reached");
            return SearchOutcome {
                distance: Some(distance),
                stats,
            };
        }

        let mut next = Vec::new();
        for &cell in &frontier {
            let Some(here) = grid.get(cell) else {
                continue;
            };
            for neighbor in grid.neighbors(cell) {
                if visited.contains(neighbor) {
                    continue;
                }
                let Some(there) = grid.get(neighbor) else {
                    continue;
                };
                if is_legal_step(here, there) && visited.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }

        frontier = next;
        distance += 1;
    }

    stats.cells_visited = visited.len();
    debug!(?stats, "frontier exhausted, goal unreachable");
    SearchOutcome {
        distance: None,
        stats,
    }
}
