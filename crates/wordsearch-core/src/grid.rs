use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Storage key in `"row,col"` form
    pub fn key(&self) -> String {
        format!("{},{}", self.row, self.col)
    }

    /// Parse a `"row,col"` storage key
    pub fn parse_key(key: &str) -> Option<Self> {
        let (row, col) = key.split_once(',')?;
        Some(Self::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step between consecutive letters of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    pub fn is_diagonal(&self) -> bool {
        self.dr != 0 && self.dc != 0
    }

    pub fn reversed(&self) -> Self {
        Self::new(-self.dr, -self.dc)
    }
}

/// The eight placement directions. Generation draws an index into this table,
/// so the order is part of the seed contract.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
];

/// Fully lettered puzzle grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build from row-major letters; `None` if the count doesn't match
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<char>) -> Option<Self> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Caller guarantees `cells.len() == rows * cols`
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Parse equal-length row strings, e.g. `["CAT", "XYZ"]`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let cols = rows.first()?.as_ref().chars().count();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let letters: Vec<char> = row.as_ref().chars().collect();
            if letters.len() != cols {
                return None;
            }
            cells.extend(letters);
        }
        Self::from_cells(rows.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Letter at a position, `None` when out of range
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Move `steps` cells from `pos` along `dir`, staying on the grid
    pub fn step(&self, pos: Position, dir: Direction, steps: usize) -> Option<Position> {
        step_within(self.rows, self.cols, pos, dir, steps)
    }

    /// All positions in raster order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// One row as a string
    pub fn row_string(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols].iter().collect()
    }

    /// All rows, top to bottom
    pub fn row_strings(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.row_string(r)).collect()
    }

    /// Letters read from `start` along `dir`, `None` if the run leaves the grid
    pub fn read(&self, start: Position, dir: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| self.step(start, dir, i).and_then(|p| self.get(p)))
            .collect()
    }
}

/// Bounds-checked step on a `rows` x `cols` board
pub(crate) fn step_within(
    rows: usize,
    cols: usize,
    pos: Position,
    dir: Direction,
    steps: usize,
) -> Option<Position> {
    let r = pos.row as i64 + dir.dr as i64 * steps as i64;
    let c = pos.col as i64 + dir.dc as i64 * steps as i64;
    if r < 0 || c < 0 || r >= rows as i64 || c >= cols as i64 {
        return None;
    }
    Some(Position::new(r as usize, c as usize))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.cells[row * self.cols + col].to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
