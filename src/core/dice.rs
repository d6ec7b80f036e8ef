//! Sources of randomness for shaking the board
//!
//! A shake is two steps: a `Shuffler` reorders the cubes across the grid, then
//! a `Die` picks the face each cube lands on. The predictable variants make
//! boards reproducible in tests and in `--predictable` mode.

use super::board::Board;
use super::cube::{Cube, FACE_COUNT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Something that rolls a six-sided die, yielding a face index in `0..6`
pub trait Die {
    fn roll(&mut self) -> usize;
}

/// Something that reorders the cubes on the board
pub trait Shuffler {
    fn shuffle(&mut self, cubes: &mut [Cube]);
}

/// A fair six-sided die
pub struct SixSidedDie {
    rng: StdRng,
}

impl SixSidedDie {
    /// Die seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Die that rolls the same sequence for the same seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SixSidedDie {
    fn default() -> Self {
        Self::new()
    }
}

impl Die for SixSidedDie {
    fn roll(&mut self) -> usize {
        self.rng.random_range(0..FACE_COUNT)
    }
}

/// A loaded die that always lands on the same face
#[derive(Debug, Clone, Copy)]
pub struct PredictableDie {
    always_rolls: usize,
}

impl PredictableDie {
    /// Values of 6 or more wrap around to a valid face.
    #[must_use]
    pub const fn new(always_rolls: usize) -> Self {
        Self {
            always_rolls: always_rolls % FACE_COUNT,
        }
    }
}

impl Default for PredictableDie {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Die for PredictableDie {
    fn roll(&mut self) -> usize {
        self.always_rolls
    }
}

/// Uniform random permutation of the cubes
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, cubes: &mut [Cube]) {
        cubes.shuffle(&mut self.rng);
    }
}

/// Reverses the cube order
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictableShuffler;

impl Shuffler for PredictableShuffler {
    fn shuffle(&mut self, cubes: &mut [Cube]) {
        cubes.reverse();
    }
}

/// Leaves the cubes where they are
#[derive(Debug, Clone, Copy, Default)]
pub struct NonShuffler;

impl Shuffler for NonShuffler {
    fn shuffle(&mut self, _cubes: &mut [Cube]) {}
}

/// A shuffler and a die kept together so a client can deal fresh boards
pub struct Dealer {
    shuffler: Box<dyn Shuffler + Send>,
    die: Box<dyn Die + Send>,
}

impl Dealer {
    /// Random boards, reproducible when a seed is given
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                shuffler: Box::new(RandomShuffler::seeded(seed)),
                die: Box::new(SixSidedDie::seeded(seed.wrapping_add(1))),
            },
            None => Self {
                shuffler: Box::new(RandomShuffler::new()),
                die: Box::new(SixSidedDie::new()),
            },
        }
    }

    /// Reversed cubes, every die showing face 4
    #[must_use]
    pub fn predictable() -> Self {
        Self {
            shuffler: Box::new(PredictableShuffler),
            die: Box::new(PredictableDie::default()),
        }
    }

    /// A freshly shaken board
    pub fn deal(&mut self) -> Board {
        let mut board = Board::new();
        board.shake(self.shuffler.as_mut(), self.die.as_mut());
        board
    }
}
