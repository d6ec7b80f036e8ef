//! The 4x4 grid of cubes

use super::cube::{Cube, FACE_COUNT, standard_cubes};
use super::dice::{Die, Shuffler};
use super::position::{CELL_COUNT, GRID_SIZE, Position};
use crate::error::BoggleError;
use std::fmt;

/// Single-letter faces used when building a board from a fixed layout
const LETTER_FACES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// A Boggle board: sixteen cubes laid out in row-major order
///
/// The board also tracks where each cube currently sits, so cubes can be
/// addressed either by position or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cubes: Vec<Cube>,
    locations: [usize; CELL_COUNT],
}

impl Board {
    /// Unshaken board: cubes 0..15 in id order, each showing its first face
    ///
    /// # Examples
    /// ```
    /// use boggle::core::{Board, Position};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.letter_at(Position::new(0, 0).unwrap()), "A");
    /// assert_eq!(board.letter_at(Position::new(3, 3).unwrap()), "G");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_cubes(standard_cubes())
    }

    fn from_cubes(cubes: Vec<Cube>) -> Self {
        let mut board = Self {
            cubes,
            locations: [0; CELL_COUNT],
        };
        board.update_locations();
        board
    }

    /// Board with fixed letters, e.g. `"UTPU TITS RRVS MAIO"`
    ///
    /// Whitespace and `/` are ignored. `Q` is read as the `Qu` digraph whether
    /// or not a `u` follows it.
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidLayout` for non-letters or a cell count
    /// other than 16.
    pub fn from_layout(layout: &str) -> Result<Self, BoggleError> {
        let mut faces: Vec<&'static str> = Vec::with_capacity(CELL_COUNT);
        let mut chars = layout
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .peekable();

        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                return Err(BoggleError::InvalidLayout(format!(
                    "'{c}' is not a letter"
                )));
            }
            let upper = c.to_ascii_uppercase();
            if upper == 'Q' {
                chars.next_if(|next| next.eq_ignore_ascii_case(&'u'));
                faces.push("Qu");
            } else {
                faces.push(LETTER_FACES[(upper as u8 - b'A') as usize]);
            }
        }

        if faces.len() != CELL_COUNT {
            return Err(BoggleError::InvalidLayout(format!(
                "expected {CELL_COUNT} cells, got {}",
                faces.len()
            )));
        }

        let cubes = faces
            .into_iter()
            .enumerate()
            .map(|(id, face)| Cube::new(id, [face; FACE_COUNT]))
            .collect();
        Ok(Self::from_cubes(cubes))
    }

    /// Shake the board: shuffle the cubes, then roll each one
    pub fn shake<S, D>(&mut self, shuffler: &mut S, die: &mut D)
    where
        S: Shuffler + ?Sized,
        D: Die + ?Sized,
    {
        shuffler.shuffle(&mut self.cubes);
        self.update_locations();
        for cube in &mut self.cubes {
            cube.roll(die);
        }
        tracing::info!(layout = %self.layout(), "board shaken");
    }

    fn update_locations(&mut self) {
        for (index, cube) in self.cubes.iter().enumerate() {
            self.locations[cube.id()] = index;
        }
    }

    /// The cube at a position
    #[inline]
    #[must_use]
    pub fn cube_at(&self, pos: Position) -> &Cube {
        &self.cubes[pos.index()]
    }

    /// Uppercased letters shown at a position (`"QU"` for the digraph)
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> String {
        self.cube_at(pos).letter()
    }

    /// Where the cube with the given id currently sits
    ///
    /// # Errors
    /// Returns `BoggleError::UnknownCube` if no cube has that id.
    pub fn position_of(&self, cube_id: usize) -> Result<Position, BoggleError> {
        let index = self
            .locations
            .get(cube_id)
            .ok_or(BoggleError::UnknownCube(cube_id))?;
        Position::from_index(*index)
    }

    /// Whether two cubes touch horizontally, vertically or diagonally
    ///
    /// Unknown cube ids are never adjacent to anything.
    #[must_use]
    pub fn adjacent(&self, cube_a: usize, cube_b: usize) -> bool {
        match (self.position_of(cube_a), self.position_of(cube_b)) {
            (Ok(a), Ok(b)) => a.is_adjacent(b),
            _ => false,
        }
    }

    /// Cubes in row-major order
    #[must_use]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Compact layout such as `UTPU/TITS/RRVS/MAIO`, accepted by `from_layout`
    #[must_use]
    pub fn layout(&self) -> String {
        self.cubes
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(Cube::to_string).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cubes.chunks(GRID_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let letters: Vec<String> = row.iter().map(Cube::to_string).collect();
            write!(f, "{}", letters.join(" "))?;
        }
        Ok(())
    }
}
