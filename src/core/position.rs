//! Grid coordinates
//!
//! Cells are addressed by row and column, both in `0..4`. For display and text
//! input a cell is written as a column letter followed by a row number, so
//! `a1` is the upper-left cell and `d4` the lower-right.

use crate::error::BoggleError;
use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on the board
pub const GRID_SIZE: usize = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell on the 4x4 grid; the default is the upper-left cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a position, checking that it lies on the grid
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidPosition` if `row` or `col` is 4 or more.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Position;
    ///
    /// assert!(Position::new(3, 3).is_ok());
    /// assert!(Position::new(4, 0).is_err());
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, BoggleError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoggleError::InvalidPosition { row, col });
        }
        Ok(Self { row, col })
    }

    /// Position for a row-major cell index in `0..16`
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidIndex` if `index` is 16 or more.
    pub fn from_index(index: usize) -> Result<Self, BoggleError> {
        if index >= CELL_COUNT {
            return Err(BoggleError::InvalidIndex(index));
        }
        Ok(Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        })
    }

    /// Every cell on the board in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(|index| Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major index in `0..16`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Whether two cells touch horizontally, vertically or diagonally
    ///
    /// A cell is never adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Position;
    ///
    /// let centre = Position::new(1, 2).unwrap();
    /// assert!(centre.is_adjacent(Position::new(0, 3).unwrap()));
    /// assert!(!centre.is_adjacent(Position::new(3, 2).unwrap()));
    /// assert!(!centre.is_adjacent(centre));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr + dc) > 0
    }

    /// All cells adjacent to this one (3, 5 or 8 of them)
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Self::all().filter(move |&other| self.is_adjacent(other))
    }

    /// Move by a signed offset, returning `None` if that leaves the grid
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = char::from(b'a' + self.col as u8);
        write!(f, "{col}{}", self.row + 1)
    }
}

impl FromStr for Position {
    type Err = BoggleError;

    /// Parse `a1`..`d4` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoggleError::InvalidCell(s.to_string());

        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let row_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !col_char.is_ascii_lowercase() {
            return Err(invalid());
        }

        let col = (col_char as usize) - ('a' as usize);
        let row = row_char
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .ok_or_else(invalid)?;

        Self::new(row, col)
    }
}
