use crate::board::Board;
use crate::error::SetupError;
use crate::types::{Coord, Seat};
use crate::words::WordRecord;

/// A proposed move: one new letter written into `cell`, plus the
/// caller-declared reading order of the claimed word. The engine never
/// discovers words on its own; the mover always names the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub cell: Coord,
    pub letter: char,
    pub path: Vec<Coord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    pub score: u32,
}

impl PlayerState {
    #[inline]
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            score: 0,
        }
    }
}

/// Full game state: board, played-word record, both players, and whose turn
/// it is. The dictionary is not owned here; like every other engine
/// operation, callers pass the shared `WordSet` explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub used: WordRecord,
    pub players: [PlayerState; 2],
    pub next: Seat,
}

impl GameState {
    /// Start a game on a `size` x `size` board with `initial_word` placed
    /// centered on the middle row. The seed word is not entered into the
    /// used-word record.
    pub fn new(size: usize, initial_word: &str) -> Result<Self, SetupError> {
        if size == 0 {
            return Err(SetupError::BoardTooSmall);
        }
        let word = initial_word.trim();
        if word.is_empty() {
            return Err(SetupError::EmptyInitialWord);
        }
        if !word.chars().all(char::is_alphabetic) {
            return Err(SetupError::NonAlphabeticInitialWord {
                word: word.to_owned(),
            });
        }
        let word = word.to_uppercase();
        let len = word.chars().count();
        if len > size {
            return Err(SetupError::WordTooLong { word, size });
        }

        let mut board = Board::new(size);
        let row = size / 2;
        let start_col = (size - len) / 2;
        for (i, ch) in word.chars().enumerate() {
            board.place(Coord::new(row, start_col + i), ch);
        }

        Ok(Self {
            board,
            used: WordRecord::new(),
            players: [PlayerState::new("Player 1"), PlayerState::new("Player 2")],
            next: Seat::One,
        })
    }

    #[inline]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.next.index()]
    }

    #[inline]
    pub fn current_player_mut(&mut self) -> &mut PlayerState {
        &mut self.players[self.next.index()]
    }

    #[inline]
    pub fn score(&self, seat: Seat) -> u32 {
        self.players[seat.index()].score
    }

    #[inline]
    pub fn used_words(&self) -> impl Iterator<Item = &str> {
        self.used.iter()
    }

    /// Successful moves so far; doubles as the turn counter for the
    /// deterministic search RNG.
    #[inline]
    pub fn moves_played(&self) -> u64 {
        self.used.len() as u64
    }

    /// Hand the turn to the other seat. A failed attempt never advances the
    /// turn, so callers invoke this only after a successful move.
    #[inline]
    pub fn advance_turn(&mut self) {
        self.next = self.next.other();
    }
}
