/// The playing alphabet, in the fixed order the move search tries letters.
pub const ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into `GameState::players`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Board coordinate, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff `other` is exactly one step away along a single axis.
    #[inline]
    pub fn is_orthogonal_neighbor(self, other: Coord) -> bool {
        (self.row.abs_diff(other.row) == 1 && self.col == other.col)
            || (self.col.abs_diff(other.col) == 1 && self.row == other.row)
    }
}

/// Normalize a proposed letter token: exactly one alphabetic character,
/// uppercased. Characters whose uppercase form expands to more than one
/// character do not qualify as a single board letter.
#[inline]
pub fn normalize_letter(letter: char) -> Option<char> {
    if !letter.is_alphabetic() {
        return None;
    }
    let mut up = letter.to_uppercase();
    match (up.next(), up.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
