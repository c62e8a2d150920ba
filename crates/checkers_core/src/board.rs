use std::fmt;

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be an even number >= 4, got {0}")]
    InvalidSize(usize),
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown cell character {ch:?} at ({row},{col})")]
    UnknownCell { ch: char, row: usize, col: usize },
    #[error("piece on light square ({row},{col})")]
    LightSquare { row: usize, col: usize },
}

/// Square N×N board. Dark squares are those with an even (row + col).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

fn validate_size(size: usize) -> Result<(), BoardError> {
    if size < 4 || size % 2 != 0 {
        return Err(BoardError::InvalidSize(size));
    }
    Ok(())
}

pub fn is_dark(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}

impl Board {
    /// Starting position: `size/2 - 1` rows of men per side, White on the
    /// low rows, Black on the high rows.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let mut b = Board::empty(size)?;
        let rows_per_side = size / 2 - 1;
        for row in 0..size {
            for col in 0..size {
                if !is_dark(row, col) {
                    continue;
                }
                if row < rows_per_side {
                    b.set(row, col, Some(Piece::man(Player::White)));
                } else if row >= size - rows_per_side {
                    b.set(row, col, Some(Piece::man(Player::Black)));
                }
            }
        }
        Ok(b)
    }

    pub fn empty(size: usize) -> Result<Self, BoardError> {
        validate_size(size)?;
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Builds a board from text rows, row 0 first.
    ///
    /// `.` is an empty square, `w`/`b` are men and `W`/`B` kings.
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut b = Board::empty(size)?;
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or(BoardError::UnknownCell { ch, row, col })?;
                if !is_dark(row, col) {
                    return Err(BoardError::LightSquare { row, col });
                }
                b.set(row, col, Some(piece));
            }
        }
        Ok(b)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Piece on (row, col); squares off the board read as empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[row * self.size + col].is_none()
    }

    /// Writes a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col] = piece;
        }
    }

    pub fn take(&mut self, row: usize, col: usize) -> Option<Piece> {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col].take()
        } else {
            None
        }
    }

    /// Squares holding one of `player`'s pieces, row-major.
    pub fn squares(&self, player: Player) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| match cell {
            Some(pc) if pc.color == player => Some((i / self.size, i % self.size, *pc)),
            _ => None,
        })
    }

    pub fn count(&self, player: Player) -> usize {
        self.squares(player).count()
    }

    pub fn count_kings(&self, player: Player) -> usize {
        self.squares(player).filter(|(_, _, pc)| pc.is_king()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row} ")?;
            for col in 0..self.size {
                let ch = self.get(row, col).map_or('.', Piece::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
