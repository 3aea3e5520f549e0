use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::engine::apply::attempt_move;
use crate::error::SearchExhausted;
use crate::state::{GameState, Move};
use crate::types::{Coord, ALPHABET};
use crate::words::WordSet;

mod scan;

/// Window bounds for the straight-line scan, in characters.
#[derive(Debug, Clone, Copy)]
pub struct ScanLimits {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 5,
        }
    }
}

/// A committed computer move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundMove {
    pub cell: Coord,
    pub letter: char,
    pub word: String,
    pub points: u32,
}

/// Find and commit any one legal move for the current player.
///
/// Exhaustive local search, not optimization: candidate attachment cells are
/// shuffled with the injected RNG, then for each cell and each alphabet
/// letter (fixed order) the letter is placed speculatively and the straight
/// lines through the cell are scanned for dictionary words. Candidates are
/// replayed through the authoritative `attempt_move`; the first confirmed
/// hit commits and wins. The scan is deliberately restricted to straight
/// horizontal/vertical runs; a human caller may still submit bent paths
/// directly to `attempt_move`.
///
/// `Err(SearchExhausted)` means no cell/letter pair yields a word: the
/// computer concedes, and the state is left untouched.
pub fn find_move(
    state: &mut GameState,
    words: &WordSet,
    limits: ScanLimits,
    rng: &mut impl Rng,
) -> Result<FoundMove, SearchExhausted> {
    let mut spots = attachment_spots(&state.board);
    spots.shuffle(rng);

    for cell in spots {
        for letter in ALPHABET.chars() {
            let candidates = state
                .board
                .with_trial(cell, letter, |b| {
                    scan::line_candidates(b, cell, limits, words, &state.used)
                });
            for (word, path) in candidates {
                let mv = Move { cell, letter, path };
                if let Ok(report) = attempt_move(state, words, &mv) {
                    return Ok(FoundMove {
                        cell,
                        letter,
                        word,
                        points: report.points,
                    });
                }
            }
        }
    }

    Err(SearchExhausted)
}

/// Empty cells with at least one occupied orthogonal neighbor: the only
/// places a new letter may legally attach.
fn attachment_spots(board: &Board) -> Vec<Coord> {
    let mut spots = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            let at = Coord::new(row, col);
            if board.is_empty_cell(at) && board.has_occupied_neighbor(at) {
                spots.push(at);
            }
        }
    }
    spots
}
