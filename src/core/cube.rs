//! Letter cubes
//!
//! A cube has six lettered faces and shows one of them on top. One face of the
//! standard set carries the digraph `Qu`, which always plays as the two letters
//! `QU`.

use super::dice::Die;
use std::fmt;

/// Faces on every cube
pub const FACE_COUNT: usize = 6;

/// The sixteen letter cubes of the standard game, indexed by cube id
pub const CUBE_FACES: [[&str; FACE_COUNT]; 16] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "Qu", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// A single six-sided letter cube
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    id: usize,
    faces: [&'static str; FACE_COUNT],
    top: usize,
}

impl Cube {
    /// A cube showing its first face
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Cube;
    ///
    /// let cube = Cube::new(8, ["D", "E", "N", "O", "S", "W"]);
    /// assert_eq!(cube.id(), 8);
    /// assert_eq!(cube.letter(), "D");
    /// ```
    #[must_use]
    pub const fn new(id: usize, faces: [&'static str; FACE_COUNT]) -> Self {
        Self { id, faces, top: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn faces(&self) -> &[&'static str; FACE_COUNT] {
        &self.faces
    }

    /// Letters on the top face, uppercased (`"QU"` for the digraph)
    #[must_use]
    pub fn letter(&self) -> String {
        self.faces[self.top].to_ascii_uppercase()
    }

    /// Index of the face currently on top
    #[inline]
    #[must_use]
    pub const fn top_face(&self) -> usize {
        self.top
    }

    /// Put a specific face on top; out-of-range indices wrap
    pub const fn set_top_face(&mut self, face: usize) {
        self.top = face % FACE_COUNT;
    }

    /// Roll the cube, returning the new top letter
    pub fn roll<D: Die + ?Sized>(&mut self, die: &mut D) -> String {
        self.set_top_face(die.roll());
        self.letter()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faces[self.top])
    }
}

/// All sixteen standard cubes in id order
#[must_use]
pub fn standard_cubes() -> Vec<Cube> {
    CUBE_FACES
        .iter()
        .enumerate()
        .map(|(id, &faces)| Cube::new(id, faces))
        .collect()
}
