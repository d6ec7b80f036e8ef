//! Core domain types for Boggle
//!
//! Positions, cubes, the board, randomness for shaking it, and the path rules
//! that decide which letter sequences can be traced on it.

mod board;
mod cube;
mod dice;
mod path;
mod position;

pub use board::Board;
pub use cube::{CUBE_FACES, Cube, FACE_COUNT, standard_cubes};
pub use dice::{
    Dealer, Die, NonShuffler, PredictableDie, PredictableShuffler, RandomShuffler, Shuffler,
    SixSidedDie,
};
pub use path::{find_path, validate_path};
pub use position::{CELL_COUNT, GRID_SIZE, Position};
