/// Represents a disc in the game.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `Black` - Represents a black disc. Black moves first.
/// * `White` - Represents a white disc.
///
/// `Black` and `White` double as the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a disc from its character representation.
    ///
    /// Accepts `X`/`x`/`B`/`b` for Black, `O`/`o`/`W`/`w` for White and `-`/`.` for empty.
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            'X' | 'x' | 'B' | 'b' => Some(Disc::Black),
            'O' | 'o' | 'W' | 'w' => Some(Disc::White),
            '-' | '.' => Some(Disc::Empty),
            _ => None,
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(&self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Sign used to convert a Black-positive score to this side's perspective.
    pub fn sign(self) -> i32 {
        match self {
            Disc::Black => 1,
            Disc::White => -1,
            Disc::Empty => 0,
        }
    }

    /// Returns `true` for `Black` and `White`.
    pub fn is_side(self) -> bool {
        self != Disc::Empty
    }

    /// Human readable side name.
    pub fn name(self) -> &'static str {
        match self {
            Disc::Black => "Black",
            Disc::White => "White",
            Disc::Empty => "Empty",
        }
    }
}
