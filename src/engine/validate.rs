use crate::board::Board;
use crate::error::MoveError;
use crate::state::Move;
use crate::types::{normalize_letter, Coord};
use crate::words::{WordRecord, WordSet};

/// Outcome of a successful validation: the composed word, its character
/// count, and the normalized letter to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMove {
    pub word: String,
    pub len: usize,
    pub letter: char,
}

/// Check a proposed move against the board, dictionary, and used-word
/// record, in order: placement, connectivity, path well-formedness and word
/// composition (under a speculative placement), inclusion of the new cell in
/// the path, dictionary membership, novelty.
///
/// The board is mutated speculatively while the path is read and is restored
/// before returning; observably the board is unchanged on every path,
/// success included. Committing is `attempt_move`'s job.
pub fn validate_move(
    board: &mut Board,
    words: &WordSet,
    used: &WordRecord,
    mv: &Move,
) -> Result<ValidatedMove, MoveError> {
    let letter = normalize_letter(mv.letter).ok_or(MoveError::InvalidPlacement)?;
    if !board.is_empty_cell(mv.cell) {
        return Err(MoveError::InvalidPlacement);
    }
    if !board.has_occupied_neighbor(mv.cell) {
        return Err(MoveError::Disconnected);
    }

    let word = board.with_trial(mv.cell, letter, |b| compose_path_word(b, &mv.path))?;

    if !mv.path.contains(&mv.cell) {
        return Err(MoveError::LetterUnused);
    }
    if !words.contains(&word) {
        return Err(MoveError::NotInDictionary(word));
    }
    if used.contains(&word) {
        return Err(MoveError::AlreadyUsed(word));
    }

    let len = word.chars().count();
    Ok(ValidatedMove { word, len, letter })
}

/// Read the letters along `path` in order, enforcing well-formedness: every
/// coordinate occupied, each consecutive pair orthogonally adjacent, no
/// coordinate visited twice. Consecutive adjacency is all that is required;
/// a path may bend freely.
fn compose_path_word(board: &Board, path: &[Coord]) -> Result<String, MoveError> {
    if path.is_empty() {
        return Err(MoveError::InvalidPath);
    }
    let mut word = String::with_capacity(path.len() * 2);
    for (i, &at) in path.iter().enumerate() {
        let Some(ch) = board.get(at) else {
            return Err(MoveError::InvalidPath);
        };
        if path[..i].contains(&at) {
            return Err(MoveError::InvalidPath);
        }
        if i > 0 && !path[i - 1].is_orthogonal_neighbor(at) {
            return Err(MoveError::InvalidPath);
        }
        word.push(ch);
    }
    Ok(word)
}
