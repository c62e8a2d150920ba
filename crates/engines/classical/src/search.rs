//! Minimax search with alpha-beta pruning

use checkers_core::{evaluate, legal_moves, resolve_capture_chain, Board, Move, Player};

/// Searches the position for `player` and returns the best move with its score.
///
/// Every root move is played out with its full capture chain on a copy of the
/// board, then scored by [`minimax`] with the opponent to move. The first move
/// with the strictly highest score wins ties.
///
/// # Arguments
/// * `board` - The position to search
/// * `player` - Side to move, and the side the score is computed for
/// * `depth` - Search depth in turns, including the root turn
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The chosen move and its score, or `None` if `player` has no legal move
pub fn pick_best_move(
    board: &Board,
    player: Player,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for mv in legal_moves(board, player) {
        let mut child = board.clone();
        resolve_capture_chain(&mut child, mv, player);
        *nodes += 1;

        let score = minimax(
            &child,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
            player,
            nodes,
        );

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `perspective` is fixed for the whole tree: leaves are always scored with
/// `evaluate(board, perspective)`. The side to move is `perspective` on
/// maximizing plies and its opponent on minimizing plies.
///
/// A position without legal moves is scored statically, like a depth-0 leaf.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: Player,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board, perspective);
    }

    let mover = if maximizing {
        perspective
    } else {
        perspective.other()
    };
    let moves = legal_moves(board, mover);
    if moves.is_empty() {
        return evaluate(board, perspective);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = board.clone();
        resolve_capture_chain(&mut child, mv, mover);
        *nodes += 1;

        let score = minimax(
            &child,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            perspective,
            nodes,
        );

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break; // Cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
