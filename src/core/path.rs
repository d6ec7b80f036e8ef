//! Path rules
//!
//! A word is played by tracing a path through the grid: every step moves to
//! one of the eight neighbouring cells and no cell is used twice.

use super::board::Board;
use super::position::Position;
use crate::error::BoggleError;

/// Check that a sequence of cells forms a legal path and spell it out
///
/// # Errors
/// - `EmptyPath` if no cells are given
/// - `CellReused` if a cell appears twice
/// - `NotAdjacent` if two consecutive cells do not touch
///
/// # Examples
/// ```
/// use boggle::core::{Board, Position, validate_path};
///
/// let board = Board::from_layout("UTPU TITS RRVS MAIO").unwrap();
/// let path = [
///     Position::new(0, 2).unwrap(),
///     Position::new(0, 3).unwrap(),
///     Position::new(1, 2).unwrap(),
/// ];
/// assert_eq!(validate_path(&board, &path).unwrap(), "PUT");
/// ```
pub fn validate_path(board: &Board, path: &[Position]) -> Result<String, BoggleError> {
    let Some(&first) = path.first() else {
        return Err(BoggleError::EmptyPath);
    };

    let mut used: u16 = 1 << first.index();
    let mut word = board.letter_at(first);

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let bit = 1 << to.index();
        if used & bit != 0 {
            return Err(BoggleError::CellReused(to.to_string()));
        }
        if !from.is_adjacent(to) {
            return Err(BoggleError::NotAdjacent {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        used |= bit;
        word.push_str(&board.letter_at(to));
    }

    Ok(word)
}

/// Find a legal path that spells `word`, if one exists
///
/// Matching is case-insensitive. A `Qu` cube consumes the two letters `QU`.
#[must_use]
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Position>> {
    let target = word.trim().to_ascii_uppercase();
    if target.is_empty() {
        return None;
    }

    let mut path = Vec::with_capacity(target.len());
    for start in Position::all() {
        if extend(board, &target, start, 0, &mut path) {
            return Some(path);
        }
    }
    None
}

fn extend(
    board: &Board,
    remaining: &str,
    pos: Position,
    used: u16,
    path: &mut Vec<Position>,
) -> bool {
    let bit = 1 << pos.index();
    if used & bit != 0 {
        return false;
    }
    let letter = board.letter_at(pos);
    let Some(rest) = remaining.strip_prefix(letter.as_str()) else {
        return false;
    };

    path.push(pos);
    if rest.is_empty() {
        return true;
    }
    for next in pos.neighbors() {
        if extend(board, rest, next, used | bit, path) {
            return true;
        }
    }
    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board() -> Board {
        Board::from_layout("UTPU TITS RRVS MAIO").unwrap()
    }

    #[test]
    fn valid_path_spells_word() {
        let path = [pos(0, 2), pos(0, 3), pos(1, 2)];
        assert_eq!(validate_path(&board(), &path).unwrap(), "PUT");
    }

    #[test]
    fn single_cell_is_a_path() {
        assert_eq!(validate_path(&board(), &[pos(3, 1)]).unwrap(), "A");
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(validate_path(&board(), &[]), Err(BoggleError::EmptyPath));
    }

    #[test]
    fn gap_in_path_is_rejected() {
        let path = [pos(0, 2), pos(0, 3), pos(1, 0)];
        assert_eq!(
            validate_path(&board(), &path),
            Err(BoggleError::NotAdjacent {
                from: "d1".to_string(),
                to: "a2".to_string(),
            })
        );
    }

    #[test]
    fn revisited_cell_is_rejected() {
        let path = [pos(1, 1), pos(1, 2), pos(1, 1)];
        assert_eq!(
            validate_path(&board(), &path),
            Err(BoggleError::CellReused("b2".to_string()))
        );
    }

    #[test]
    fn find_path_returns_a_valid_path() {
        let board = board();
        for word in ["PUT", "spit", "Arm", "VIA", "TIPS"] {
            let path = find_path(&board, word).unwrap_or_else(|| panic!("{word} not found"));
            assert_eq!(validate_path(&board, &path).unwrap(), word.to_uppercase());
        }
    }

    #[test]
    fn find_path_respects_adjacency_and_reuse() {
        let board = board();
        // O only touches V, S and I
        assert!(find_path(&board, "TOP").is_none());
        // one P on the board
        assert!(find_path(&board, "PUP").is_none());
        assert!(find_path(&board, "").is_none());
    }

    #[test]
    fn find_path_treats_qu_as_one_cube() {
        let board = Board::from_layout("QEEN XXXX XXXX XXXX").unwrap();
        let path = find_path(&board, "queen").unwrap();
        assert_eq!(path.len(), 4);
        assert!(find_path(&board, "QEEN").is_none());
    }
}
