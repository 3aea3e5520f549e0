#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod board;
pub mod error;
pub mod rng;
pub mod state;
pub mod types;
pub mod words;

pub mod engine {
    pub mod apply;
    pub mod validate;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::{attempt_move, MoveReport};
pub use crate::engine::validate::{validate_move, ValidatedMove};
pub use crate::error::{DictionaryError, MoveError, SearchExhausted, SetupError};
pub use crate::rng::rng_for_turn;
pub use crate::solver::{find_move, FoundMove, ScanLimits};
pub use crate::state::{GameState, Move, PlayerState};
pub use crate::types::{Coord, Seat, ALPHABET};
pub use crate::words::{WordRecord, WordSet, DEFAULT_MIN_WORD_LEN};
