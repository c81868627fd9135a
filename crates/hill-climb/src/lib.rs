//! Shortest-path solver for elevation-grid puzzles.
//!
//! A heightmap is parsed into a validated [`Grid`], then searched
//! breadth-first under a [`StepRule`] that limits how far each step may
//! climb. The search is a plain function of its inputs and can be reused
//! with any goal predicate and step rule.

pub mod grid;
pub mod logging;
pub mod parse;
pub mod rules;
pub mod search;
pub mod solver;

// Re-export main types
pub use grid::{Cell, Direction, Elevation, Grid, GridError, HeightMap, HIGHEST, LOWEST};
pub use parse::{parse_height_map, ParseError};
pub use rules::StepRule;
pub use search::{shortest_path, SearchOutcome, SearchStats, VisitedSet};
pub use solver::{solve, solve_forward, Answer, Part};
