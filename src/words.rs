use std::fs;
use std::hash::BuildHasherDefault;
use std::path::Path;

use hashbrown::HashSet as HbHashSet;

use crate::error::DictionaryError;

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastSet = HbHashSet<String, FastHasher>;

/// Words shorter than this never enter a `WordSet` unless the caller picks
/// another threshold.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Immutable dictionary of legal words, uppercased and pre-filtered to
/// alphabetic words of at least `min_len` characters. Word length is always
/// measured in characters, never bytes (Cyrillic words are multi-byte).
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FastSet,
    min_len: usize,
}

impl WordSet {
    /// Build a set from any word source, applying trimming, uppercasing, and
    /// the alphabetic/minimum-length filter.
    pub fn from_words<I, S>(words: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FastSet::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let up = word.to_uppercase();
            if up.chars().all(char::is_alphabetic) && up.chars().count() >= min_len {
                set.insert(up);
            }
        }
        Self {
            words: set,
            min_len,
        }
    }

    /// Load a plain-text word list, one word per line. A missing file or a
    /// list with no usable words is an error rather than an empty set.
    pub fn load_from_file<P: AsRef<Path>>(path: P, min_len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_words(data.lines(), min_len);
        if set.is_empty() {
            return Err(DictionaryError::NoWords {
                path: path.to_path_buf(),
            });
        }
        Ok(set)
    }

    /// Case-insensitive exact membership.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    #[inline]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Words already played this game. A word enters the record at most once and
/// stays for the rest of the game, no matter which player spelled it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    played: FastSet,
}

impl WordRecord {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a played word (case-normalized). Returns false if it was
    /// already present.
    #[inline]
    pub fn insert(&mut self, word: &str) -> bool {
        self.played.insert(word.to_uppercase())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.played.contains(&word.to_uppercase())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.played.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.played.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}
