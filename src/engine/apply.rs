use crate::engine::validate::validate_move;
use crate::error::MoveError;
use crate::state::{GameState, Move};
use crate::types::Seat;
use crate::words::WordSet;

/// What a committed move did, for reporting to the interaction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub seat: Seat,
    pub word: String,
    pub points: u32,
}

/// Validate and, on success, commit a move: write the letter, record the
/// word, add its character count to the current player's score. A failed
/// attempt leaves board, record, and scores untouched.
///
/// Turn advancement is deliberately not done here; the caller switches seats
/// via `GameState::advance_turn` only on success, so a human's illegal
/// attempt can be retried without burning the turn.
pub fn attempt_move(
    state: &mut GameState,
    words: &WordSet,
    mv: &Move,
) -> Result<MoveReport, MoveError> {
    let validated = validate_move(&mut state.board, words, &state.used, mv)?;

    let points = validated.len as u32;
    state.board.place(mv.cell, validated.letter);
    state.used.insert(&validated.word);
    let seat = state.next;
    state.current_player_mut().score += points;

    Ok(MoveReport {
        seat,
        word: validated.word,
        points,
    })
}
