use crate::{board::Board, types::*};

#[inline]
fn is_enemy(board: &Board, player: Player, row: usize, col: usize) -> bool {
    matches!(board.get(row, col), Some(pc) if pc.color != player)
}

/// True if a king on (row, col) has a long-range capture along (dr, dc):
/// empties, then exactly one enemy, then at least one empty landing.
fn king_ray_captures(board: &Board, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> bool {
    let n = board.size();
    let mut enemy_found = false;
    for dist in 1..n {
        let Some((r, c)) = offset(n, row, col, dr, dc, dist) else {
            break;
        };
        match board.get(r, c) {
            None if enemy_found => return true,
            None => {}
            Some(pc) if !enemy_found && pc.color != player => enemy_found = true,
            Some(_) => break,
        }
    }
    false
}

fn man_captures(board: &Board, player: Player, row: usize, col: usize) -> bool {
    let n = board.size();
    man_directions(player).iter().any(|&(dr, dc)| {
        match (offset(n, row, col, dr, dc, 1), offset(n, row, col, dr, dc, 2)) {
            (Some((ar, ac)), Some((jr, jc))) => {
                is_enemy(board, player, ar, ac) && board.is_empty_at(jr, jc)
            }
            _ => false,
        }
    })
}

/// Whether the piece of `player` on (row, col) can capture right now.
/// Returns false when the square does not hold one of `player`'s pieces.
pub fn has_any_capture_from(board: &Board, player: Player, row: usize, col: usize) -> bool {
    match board.get(row, col) {
        Some(pc) if pc.color == player => {
            if pc.is_king() {
                KING_DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| king_ray_captures(board, player, row, col, dr, dc))
            } else {
                man_captures(board, player, row, col)
            }
        }
        _ => false,
    }
}

/// Whether `player` has a capture anywhere on the board. When true, only
/// capturing moves are legal this turn.
pub fn has_any_capture(board: &Board, player: Player) -> bool {
    board
        .squares(player)
        .any(|(row, col, _)| has_any_capture_from(board, player, row, col))
}

/// Validates one atomic move for `player`.
///
/// `mandatory` is the turn's capture flag: when set, quiet moves are illegal.
pub fn is_legal_move(board: &Board, player: Player, mv: Move, mandatory: bool) -> Legality {
    let n = board.size();
    if !board.in_bounds(mv.from_row, mv.from_col) || !board.in_bounds(mv.to_row, mv.to_col) {
        return Legality::Illegal;
    }
    let piece = match board.get(mv.from_row, mv.from_col) {
        Some(pc) if pc.color == player => pc,
        _ => return Legality::Illegal,
    };
    if !board.is_empty_at(mv.to_row, mv.to_col) {
        return Legality::Illegal;
    }
    let dr = mv.to_row as isize - mv.from_row as isize;
    let dc = mv.to_col as isize - mv.from_col as isize;
    if dr.abs() != dc.abs() || dr == 0 {
        return Legality::Illegal;
    }
    let distance = dr.unsigned_abs();
    let (step_r, step_c) = (dr.signum(), dc.signum());

    if piece.is_king() {
        let mut enemies = 0;
        for step in 1..distance {
            let Some((r, c)) = offset(n, mv.from_row, mv.from_col, step_r, step_c, step) else {
                continue;
            };
            match board.get(r, c) {
                None => {}
                Some(pc) if pc.color != player => enemies += 1,
                Some(_) => return Legality::Illegal,
            }
        }
        return match (enemies, mandatory) {
            (1, _) => Legality::Capture,
            (0, false) => Legality::Quiet,
            _ => Legality::Illegal,
        };
    }

    if distance > 2 || step_r != player.forward() {
        return Legality::Illegal;
    }
    if distance == 2 {
        let mid_r = (mv.from_row + mv.to_row) / 2;
        let mid_c = (mv.from_col + mv.to_col) / 2;
        if is_enemy(board, player, mid_r, mid_c) {
            Legality::Capture
        } else {
            Legality::Illegal
        }
    } else if mandatory {
        Legality::Illegal
    } else {
        Legality::Quiet
    }
}

/// All legal moves for `player`, deriving the mandatory-capture flag.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, player, None, &mut out);
    out
}

/// All legal moves for `player` under an explicit mandatory-capture flag.
pub fn legal_moves_with(board: &Board, player: Player, mandatory: bool) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, player, Some(mandatory), &mut out);
    out
}

/// Legal moves starting on (row, col), for highlighting a selected piece.
pub fn legal_moves_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    mandatory: bool,
) -> Vec<Move> {
    let mut moves = legal_moves_with(board, player, mandatory);
    moves.retain(|mv| mv.from() == (row, col));
    moves
}

/// Generate legal moves into the provided buffer, reusing it across calls.
///
/// Order is row-major over the mover's pieces, then direction, then distance.
/// `must_capture = None` derives the flag with [`has_any_capture`].
pub fn legal_moves_into(
    board: &Board,
    player: Player,
    must_capture: Option<bool>,
    out: &mut Vec<Move>,
) {
    out.clear();
    let mandatory = must_capture.unwrap_or_else(|| has_any_capture(board, player));
    let n = board.size();

    for (row, col, piece) in board.squares(player) {
        if piece.is_king() {
            for &(dr, dc) in KING_DIRECTIONS.iter() {
                if mandatory {
                    gen_king_captures(board, player, row, col, dr, dc, out);
                } else {
                    for dist in 1..n {
                        let Some((r, c)) = offset(n, row, col, dr, dc, dist) else {
                            break;
                        };
                        let mv = Move::new(row, col, r, c);
                        if is_legal_move(board, player, mv, false).is_legal() {
                            out.push(mv);
                        }
                    }
                }
            }
        } else {
            for &(dr, dc) in man_directions(player).iter() {
                for dist in [1, 2] {
                    let Some((r, c)) = offset(n, row, col, dr, dc, dist) else {
                        continue;
                    };
                    let mv = Move::new(row, col, r, c);
                    let legality = is_legal_move(board, player, mv, mandatory);
                    if legality.is_capture() || (!mandatory && legality.is_legal()) {
                        out.push(mv);
                    }
                }
            }
        }
    }
}

fn gen_king_captures(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    out: &mut Vec<Move>,
) {
    let n = board.size();
    let mut enemy_found = false;
    for dist in 1..n {
        let Some((r, c)) = offset(n, row, col, dr, dc, dist) else {
            break;
        };
        match board.get(r, c) {
            None if enemy_found => {
                let mv = Move::new(row, col, r, c);
                if is_legal_move(board, player, mv, true).is_capture() {
                    out.push(mv);
                }
            }
            None => {}
            Some(pc) if !enemy_found && pc.color != player => enemy_found = true,
            Some(_) => break,
        }
    }
}

/// Plays one atomic move in place and returns whether it captured a piece.
///
/// A move of two or more squares removes the first enemy piece met on the
/// path. A man landing on its farthest row becomes a king. Moves from an
/// empty or foreign square, or of zero length, leave the board unchanged.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> bool {
    let n = board.size();
    let dr = mv.to_row as isize - mv.from_row as isize;
    let dc = mv.to_col as isize - mv.from_col as isize;
    if dr == 0 || !board.in_bounds(mv.to_row, mv.to_col) {
        return false;
    }
    let mut piece = match board.get(mv.from_row, mv.from_col) {
        Some(pc) if pc.color == player => pc,
        _ => return false,
    };
    board.set(mv.from_row, mv.from_col, None);

    let distance = dr.unsigned_abs();
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut captured = false;
    if distance > 1 {
        // Men only ever jump the adjacent square, kings may fly over empties.
        let last = if piece.is_king() { distance - 1 } else { 1 };
        for step in 1..=last {
            let Some((r, c)) = offset(n, mv.from_row, mv.from_col, step_r, step_c, step) else {
                break;
            };
            if is_enemy(board, player, r, c) {
                board.set(r, c, None);
                captured = true;
                break;
            }
        }
    }

    if piece.rank == Rank::Man && mv.to_row == player.promotion_row(n) {
        piece = Piece::king(player);
    }
    board.set(mv.to_row, mv.to_col, Some(piece));
    captured
}

/// Plays a whole turn starting with `first`: while the moving piece keeps
/// capturing, the first capture available from its landing square is
/// applied. Returns every atomic move in order.
pub fn resolve_capture_chain(board: &mut Board, first: Move, player: Player) -> Vec<Move> {
    let mut chain = vec![first];
    if !apply_move(board, first, player) {
        return chain;
    }

    let (mut row, mut col) = first.to();
    let mut buf = Vec::with_capacity(16);
    while has_any_capture_from(board, player, row, col) {
        legal_moves_into(board, player, Some(true), &mut buf);
        let Some(next) = buf.iter().copied().find(|mv| mv.from() == (row, col)) else {
            break;
        };
        apply_move(board, next, player);
        chain.push(next);
        (row, col) = next.to();
    }
    chain
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
