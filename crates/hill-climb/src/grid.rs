//! Grid representation types shared by the parser and the search.
//!
//! A [`Grid`] is validated once on construction and is read-only afterwards,
//! so nothing downstream re-checks its shape.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Ordinal height of a single cell
pub type Elevation = u8;

/// Lowest elevation on the puzzle scale (`'a'`)
pub const LOWEST: Elevation = 0;

/// Highest elevation on the puzzle scale (`'z'`)
pub const HIGHEST: Elevation = 25;

/// Orthogonal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Row and column offset of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Position on the grid, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent cell in `direction`, or `None` if it would go below zero.
    /// The upper bound is the grid's business.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// Reasons a set of rows cannot form a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{0:?} lies outside the grid")]
    OutOfBounds(Cell),
}

/// Rectangular, immutable matrix of elevations (row-major)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Elevation>>", into = "Vec<Vec<Elevation>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    elevations: Vec<Elevation>,
}

impl Grid {
    /// Build a grid from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<Elevation>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut elevations = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            elevations.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            elevations,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of an in-bounds cell
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Elevation at a cell (bounds-checked)
    pub fn get(&self, cell: Cell) -> Option<Elevation> {
        self.index_of(cell).map(|index| self.elevations[index])
    }

    /// In-bounds orthogonal neighbours of `cell`
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| cell.step(direction))
            .filter(|&next| self.contains(next))
            .collect()
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Every cell whose elevation equals `elevation`
    pub fn cells_at(&self, elevation: Elevation) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |&cell| self.get(cell) == Some(elevation))
    }

    /// Copy of this grid surrounded by a one-cell border of `elevation`
    pub fn with_border(&self, elevation: Elevation) -> Grid {
        let cols = self.cols + 2;
        let mut rows = Vec::with_capacity(self.rows + 2);
        rows.push(vec![elevation; cols]);
        for row in self.elevations.chunks(self.cols) {
            let mut bordered = Vec::with_capacity(cols);
            bordered.push(elevation);
            bordered.extend_from_slice(row);
            bordered.push(elevation);
            rows.push(bordered);
        }
        rows.push(vec![elevation; cols]);

        Grid {
            rows: self.rows + 2,
            cols,
            elevations: rows.concat(),
        }
    }
}

impl TryFrom<Vec<Vec<Elevation>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Elevation>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Elevation>> {
    fn from(grid: Grid) -> Self {
        grid.elevations
            .chunks(grid.cols)
            .map(<[Elevation]>::to_vec)
            .collect()
    }
}

/// A parsed puzzle: the grid plus its start and end markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHeightMap")]
pub struct HeightMap {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

impl HeightMap {
    /// Pair a grid with its markers, rejecting markers outside the grid
    pub fn new(grid: Grid, start: Cell, end: Cell) -> Result<Self, GridError> {
        for cell in [start, end] {
            if !grid.contains(cell) {
                return Err(GridError::OutOfBounds(cell));
            }
        }
        Ok(Self { grid, start, end })
    }
}

/// Unchecked wire form of [`HeightMap`]
#[derive(Deserialize)]
struct RawHeightMap {
    grid: Grid,
    start: Cell,
    end: Cell,
}

impl TryFrom<RawHeightMap> for HeightMap {
    type Error = GridError;

    fn try_from(raw: RawHeightMap) -> Result<Self, Self::Error> {
        HeightMap::new(raw.grid, raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec![0, 1], vec![2]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let grid = Grid::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Cell::new(1, 2)), Some(5));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.get(Cell::new(0, 3)), None);
    }

    #[test]
    fn test_neighbors_at_corner_and_middle() {
        let grid = Grid::from_rows(vec![vec![0; 3]; 3]).unwrap();

        let corner = grid.neighbors(Cell::new(0, 0));
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Cell::new(1, 0)));
        assert!(corner.contains(&Cell::new(0, 1)));

        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4);
        assert_eq!(grid.neighbors(Cell::new(2, 2)).len(), 2);
    }

    #[test]
    fn test_with_border_shifts_cells() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let bordered = grid.with_border(9);

        assert_eq!(bordered.rows(), 4);
        assert_eq!(bordered.cols(), 4);
        assert_eq!(bordered.get(Cell::new(0, 0)), Some(9));
        assert_eq!(bordered.get(Cell::new(1, 1)), Some(1));
        assert_eq!(bordered.get(Cell::new(2, 2)), Some(4));
        assert_eq!(bordered.get(Cell::new(3, 3)), Some(9));
    }

    #[test]
    fn test_grid_json_is_nested_rows() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,1],[2,3]]");

        let ragged: Result<Grid, _> = serde_json::from_str("[[0,1],[2]]");
        assert!(ragged.is_err());
    }

    #[test]
    fn test_height_map_rejects_markers_outside_grid() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();

        let map = HeightMap::new(grid.clone(), Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(map.end, Cell::new(1, 1));
        assert_eq!(
            HeightMap::new(grid.clone(), Cell::new(2, 0), Cell::new(1, 1)),
            Err(GridError::OutOfBounds(Cell::new(2, 0)))
        );
        assert_eq!(
            HeightMap::new(grid, Cell::new(0, 0), Cell::new(0, 5)),
            Err(GridError::OutOfBounds(Cell::new(0, 5)))
        );
    }

    #[test]
    fn test_height_map_json_is_validated() {
        let valid = r#"{"grid":[[0,1],[2,3]],"start":{"row":0,"col":0},"end":{"row":1,"col":1}}"#;
        let map: HeightMap = serde_json::from_str(valid).unwrap();
        assert_eq!(map.start, Cell::new(0, 0));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(serde_json::from_str::<HeightMap>(&json).unwrap(), map);

        let outside = r#"{"grid":[[0,1],[2,3]],"start":{"row":0,"col":0},"end":{"row":9,"col":1}}"#;
        let err = serde_json::from_str::<HeightMap>(outside).unwrap_err();
        assert!(err.to_string().contains("outside the grid"), "{err}");
    }
}
