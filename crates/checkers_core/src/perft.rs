use crate::{board::Board, movegen::legal_moves_into, movegen::resolve_capture_chain, types::*};

/// Pure perft node count over whole turns.
/// Each legal move is played out with its full capture chain before the
/// other side replies.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, player: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, player, None, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.clone();
            resolve_capture_chain(&mut child, mv, player);
            nodes += inner(&child, player.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, player, depth, &mut layers[..])
}
