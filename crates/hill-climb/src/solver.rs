//! The two hill-climbing puzzle parts expressed as grid searches.
//!
//! Part one walks from `S` to `E`. Part two asks for the shortest walk to `E`
//! from any lowest cell; [`solve`] answers it with a single reversed search
//! from `E`, while [`solve_forward`] seeds every lowest cell and walks
//! forward. Both must agree.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::grid::{Cell, Elevation, HeightMap, LOWEST};
use crate::rules::StepRule;
use crate::search::{shortest_path, SearchOutcome, SearchStats};

/// Which puzzle question to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// Part for its 1-based number, `None` for anything else
    pub fn from_number(number: u8) -> Option<Part> {
        match number {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// Answer to one part of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub part: Part,
    /// `None` when the end cannot be reached
    pub distance: Option<usize>,
    pub stats: SearchStats,
}

impl Answer {
    fn from_outcome(part: Part, outcome: SearchOutcome) -> Self {
        Self {
            part,
            distance: outcome.distance,
            stats: outcome.stats,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(distance) => write!(f, "{}: {}", self.part, distance),
            None => write!(f, "{}: unreachable", self.part),
        }
    }
}

/// Answer `part` for `map`
pub fn solve(map: &HeightMap, part: Part) -> Answer {
    let grid = &map.grid;
    let outcome = match part {
        Part::One => {
            let rule = StepRule::CLIMB;
            shortest_path(
                grid,
                [map.start],
                |cell| cell == map.end,
                |from, to| rule.is_legal(from, to),
            )
        }
        Part::Two => {
            let rule = StepRule::CLIMB.reversed();
            shortest_path(
                grid,
                [map.end],
                |cell| grid.get(cell) == Some(LOWEST),
                |from, to| rule.is_legal(from, to),
            )
        }
    };

    let answer = Answer::from_outcome(part, outcome);
    info!(
        part = part.number(),
        distance = ?answer.distance,
        cells_visited = answer.stats.cells_visited,
        "solved"
    );
    answer
}

/// Answer `part` by walking forward from the start side only
pub fn solve_forward(map: &HeightMap, part: Part) -> Answer {
    let grid = &map.grid;
    let rule = StepRule::CLIMB;
    let is_goal = |cell: Cell| cell == map.end;
    let is_legal_step = |from: Elevation, to: Elevation| rule.is_legal(from, to);

    let outcome = match part {
        Part::One => shortest_path(grid, [map.start], is_goal, is_legal_step),
        Part::Two => shortest_path(grid, grid.cells_at(LOWEST), is_goal, is_legal_step),
    };
    Answer::from_outcome(part, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::parse::parse_height_map;

    const EXAMPLE: &str = include_str!("../fixtures/example.txt");

    fn example() -> HeightMap {
        parse_height_map(EXAMPLE).unwrap()
    }

    #[test]
    fn test_example_answers() {
        let map = example();
        assert_eq!(solve(&map, Part::One).distance, Some(31));
        assert_eq!(solve(&map, Part::Two).distance, Some(29));
    }

    #[test]
    fn test_forward_and_reversed_agree() {
        let map = example();
        for part in Part::ALL {
            assert_eq!(
                solve(&map, part).distance,
                solve_forward(&map, part).distance,
                "{part}"
            );
        }
    }

    #[test]
    fn test_reversed_walk_from_end_to_start() {
        let map = example();
        let rule = StepRule::CLIMB_REVERSED;
        let backward = shortest_path(
            &map.grid,
            [map.end],
            |cell| cell == map.start,
            |from, to| rule.is_legal(from, to),
        );
        assert_eq!(backward.distance, solve(&map, Part::One).distance);
    }

    #[test]
    fn test_ascending_row() {
        let row: String = std::iter::once('S')
            .chain('b'..='y')
            .chain(std::iter::once('E'))
            .collect();
        let map = parse_height_map(&row).unwrap();

        let answer = solve(&map, Part::One);

        assert_eq!(answer.distance, Some(row.len() - 1));
        assert_eq!(answer.to_string(), "Part 1: 25");
    }

    #[test]
    fn test_wall_makes_end_unreachable() {
        let map = parse_height_map("Saaxzz\naaaxzE\naaaxzz").unwrap();

        let answer = solve(&map, Part::One);

        assert!(!answer.is_reachable());
        assert_eq!(answer.to_string(), "Part 1: unreachable");
        assert!(!solve(&map, Part::Two).is_reachable());
        assert!(!solve_forward(&map, Part::Two).is_reachable());
    }

    #[test]
    fn test_start_next_to_lowest_ground() {
        // Nearest lowest cell is the 'a' beside S
        let map = parse_height_map("SabcdefghijklmnopqrstuvwxyE").unwrap();
        assert_eq!(solve(&map, Part::One).distance, Some(26));
        assert_eq!(solve(&map, Part::Two).distance, Some(25));

        let grid = Grid::from_rows(vec![vec![0, 1]]).unwrap();
        let map = HeightMap::new(grid, Cell::new(0, 0), Cell::new(0, 0)).unwrap();
        assert_eq!(solve(&map, Part::One).distance, Some(0));
        assert_eq!(solve(&map, Part::Two).distance, Some(0));
    }

    #[test]
    fn test_part_numbers() {
        for part in Part::ALL {
            assert_eq!(Part::from_number(part.number()), Some(part));
        }
        assert_eq!(Part::from_number(0), None);
        assert_eq!(Part::from_number(3), None);
    }

    #[test]
    fn test_answer_json() {
        let answer = solve(&example(), Part::Two);
        let json = serde_json::to_value(answer).unwrap();

        assert_eq!(json["part"], "two");
        assert_eq!(json["distance"], 29);
        assert!(json["stats"]["cellsVisited"].as_u64().unwrap() > 0);
    }
}
