use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a man's forward step.
    pub fn forward(self) -> isize {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Row on which this player's men are promoted.
    pub fn promotion_row(self, size: usize) -> usize {
        match self {
            Player::White => size - 1,
            Player::Black => 0,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Player,
    pub rank: Rank,
}

impl Piece {
    pub fn man(color: Player) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub fn king(color: Player) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Single-character form used by board text: `w`/`b` men, `W`/`B` kings.
    pub fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Player::White, Rank::Man) => 'w',
            (Player::White, Rank::King) => 'W',
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Piece::man(Player::White)),
            'W' => Some(Piece::king(Player::White)),
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            _ => None,
        }
    }
}

/// One atomic diagonal step or jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl Move {
    pub fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    pub fn from(&self) -> (usize, usize) {
        (self.from_row, self.from_col)
    }

    pub fn to(&self) -> (usize, usize) {
        (self.to_row, self.to_col)
    }

    /// Number of diagonal steps covered (0 when the move is not diagonal).
    pub fn distance(&self) -> usize {
        let dr = self.from_row.abs_diff(self.to_row);
        let dc = self.from_col.abs_diff(self.to_col);
        if dr == dc {
            dr
        } else {
            0
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// Result of validating a single proposed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legality {
    Illegal,
    Quiet,
    Capture,
}

impl Legality {
    pub fn is_legal(self) -> bool {
        self != Legality::Illegal
    }

    pub fn is_capture(self) -> bool {
        self == Legality::Capture
    }
}

// Helpers
pub const KING_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal directions a man of `player` may move and capture in.
pub fn man_directions(player: Player) -> [(isize, isize); 2] {
    let dr = player.forward();
    [(dr, -1), (dr, 1)]
}

/// Square reached by walking `dist` steps from (row, col) along (dr, dc),
/// or `None` once it leaves a `size`×`size` board.
pub fn offset(
    size: usize,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    dist: usize,
) -> Option<(usize, usize)> {
    let r = row as isize + dr * dist as isize;
    let c = col as isize + dc * dist as isize;
    if (0..size as isize).contains(&r) && (0..size as isize).contains(&c) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}
