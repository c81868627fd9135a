//! Text-to-heightmap conversion.
//!
//! Input is one row per line. `'a'..='z'` are elevations 0 through 25, `'S'`
//! marks the start (elevation `'a'`) and `'E'` marks the end (elevation
//! `'z'`). Exactly one of each marker must be present.

use std::str::FromStr;

use thiserror::Error;

use crate::grid::{Cell, Elevation, Grid, GridError, HeightMap, HIGHEST, LOWEST};

const START_MARKER: char = 'S';
const END_MARKER: char = 'E';

/// Why a piece of text is not a valid heightmap. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains no grid rows")]
    Empty,
    #[error("line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at line {line}, column {column}")]
    InvalidChar {
        line: usize,
        column: usize,
        ch: char,
    },
    #[error("missing {0:?} marker")]
    MissingMarker(char),
    #[error("{marker:?} marker appears twice, at {first:?} and {second:?}")]
    DuplicateMarker {
        marker: char,
        first: Cell,
        second: Cell,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

fn record_marker(slot: &mut Option<Cell>, marker: char, cell: Cell) -> Result<(), ParseError> {
    match *slot {
        Some(first) => Err(ParseError::DuplicateMarker {
            marker,
            first,
            second: cell,
        }),
        None => {
            *slot = Some(cell);
            Ok(())
        }
    }
}

/// Parse puzzle text into a validated [`HeightMap`]
pub fn parse_height_map(text: &str) -> Result<HeightMap, ParseError> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    let expected = match lines.first() {
        Some(first) if !first.is_empty() => first.chars().count(),
        _ => return Err(ParseError::Empty),
    };

    let mut start = None;
    let mut end = None;
    let mut rows: Vec<Vec<Elevation>> = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        let mut elevations = Vec::with_capacity(expected);
        for (col, ch) in line.chars().enumerate() {
            let cell = Cell::new(row, col);
            let elevation = match ch {
                'a'..='z' => ch as u8 - b'a',
                START_MARKER => {
                    record_marker(&mut start, START_MARKER, cell)?;
                    LOWEST
                }
                END_MARKER => {
                    record_marker(&mut end, END_MARKER, cell)?;
                    HIGHEST
                }
                _ => {
                    return Err(ParseError::InvalidChar {
                        line: row + 1,
                        column: col + 1,
                        ch,
                    })
                }
            };
            elevations.push(elevation);
        }

        if elevations.len() != expected {
            return Err(ParseError::Ragged {
                line: row + 1,
                expected,
                found: elevations.len(),
            });
        }
        rows.push(elevations);
    }

    let start = start.ok_or(ParseError::MissingMarker(START_MARKER))?;
    let end = end.ok_or(ParseError::MissingMarker(END_MARKER))?;
    let grid = Grid::from_rows(rows)?;

    Ok(HeightMap::new(grid, start, end)?)
}

impl FromStr for HeightMap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_height_map(s)
    }
}
