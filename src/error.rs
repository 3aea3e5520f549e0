use std::path::PathBuf;

/// Why a proposed move was rejected. Every variant is recoverable: the
/// interaction loop reprompts a human or lets the search move on to the next
/// candidate. Nothing here aborts a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Out-of-bounds target, occupied cell, or a token that is not a single
    /// alphabetic letter.
    #[error("placement rejected: the target must be an empty in-bounds cell and the token a single letter")]
    InvalidPlacement,

    #[error("a new letter must touch at least one occupied cell")]
    Disconnected,

    #[error("word path must visit distinct occupied cells, each step orthogonally adjacent to the previous one")]
    InvalidPath,

    #[error("the newly placed letter must be part of the claimed word")]
    LetterUnused,

    #[error("word '{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("word '{0}' has already been played")]
    AlreadyUsed(String),
}

/// The move search ran out of candidates. Not a fault: it signals that the
/// computer player concedes and the game should end in the opponent's favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no legal move available")]
pub struct SearchExhausted;

/// Game construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board size must be at least 1")]
    BoardTooSmall,

    #[error("initial word must not be empty")]
    EmptyInitialWord,

    #[error("initial word '{word}' contains a non-alphabetic character")]
    NonAlphabeticInitialWord { word: String },

    #[error("initial word '{word}' does not fit on a board of size {size}")]
    WordTooLong { word: String, size: usize },
}

/// Word-list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {path} contains no usable words")]
    NoWords { path: PathBuf },
}
