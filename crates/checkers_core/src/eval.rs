use crate::{board::Board, types::*};

pub const MAN_VALUE: i32 = 2;
pub const KING_VALUE: i32 = 5;

#[inline]
pub fn piece_value(rank: Rank) -> i32 {
    match rank {
        Rank::Man => MAN_VALUE,
        Rank::King => KING_VALUE,
    }
}

/// Material score from `player`'s perspective.
///
/// Positive = good for `player`. No positional terms, so
/// `evaluate(b, White) == -evaluate(b, Black)` always holds.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut score = 0i32;
    for color in [Player::White, Player::Black] {
        for (_, _, pc) in board.squares(color) {
            let v = piece_value(pc.rank);
            score += if color == player { v } else { -v };
        }
    }
    score
}

/// Judges a finished playout by piece count: +1 if `player` has more
/// pieces left, -1 if fewer, 0 on equal counts.
pub fn playout_result(board: &Board, player: Player) -> i32 {
    let own = board.count(player);
    let theirs = board.count(player.other());
    match own.cmp(&theirs) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}
