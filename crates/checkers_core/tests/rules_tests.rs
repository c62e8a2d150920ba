//! End-to-end rule scenarios and property tests for rule invariants

use checkers_core::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn opening_white_has_seven_quiet_moves() {
    let board = Board::new(8).unwrap();
    let moves = legal_moves(&board, Player::White);
    assert_eq!(moves.len(), 7);
    for mv in moves {
        assert_eq!(
            is_legal_move(&board, Player::White, mv, false),
            Legality::Quiet
        );
    }
}

#[test]
fn exposed_man_forces_black_to_capture() {
    let mut board = Board::new(8).unwrap();
    // White walks one man two diagonal steps into contact with Black's line
    apply_move(&mut board, Move::new(2, 2, 3, 3), Player::White);
    apply_move(&mut board, Move::new(3, 3, 4, 4), Player::White);

    assert!(has_any_capture(&board, Player::Black));

    let moves = legal_moves(&board, Player::Black);
    assert_eq!(moves, vec![Move::new(5, 3, 3, 5), Move::new(5, 5, 3, 3)]);

    let quiet = Move::new(5, 1, 4, 0);
    assert_eq!(
        is_legal_move(&board, Player::Black, quiet, false),
        Legality::Quiet
    );
    assert_eq!(
        is_legal_move(&board, Player::Black, quiet, true),
        Legality::Illegal
    );
}

#[test]
fn lone_king_has_one_capture() {
    let board = Board::from_rows(&[
        "....", //
        ".W..",
        "....",
        "...b",
    ])
    .unwrap();
    // No square beyond (3,3), so only free moves remain
    assert!(!has_any_capture(&board, Player::White));
    assert_eq!(legal_moves(&board, Player::White).len(), 4);

    let board = Board::from_rows(&[
        "W...", //
        "....",
        "..b.",
        "....",
    ])
    .unwrap();
    let moves = legal_moves(&board, Player::White);
    assert_eq!(moves, vec![Move::new(0, 0, 3, 3)]);
    assert!(is_legal_move(&board, Player::White, moves[0], true).is_capture());
}

#[test]
fn captured_pieces_stay_removed() {
    let mut board = Board::from_rows(&[
        "W.....", //
        "......",
        "..b...",
        "......",
        "......",
        "......",
    ])
    .unwrap();
    assert!(apply_move(&mut board, Move::new(0, 0, 3, 3), Player::White));
    // Move straight back over the square the enemy stood on
    assert!(!apply_move(&mut board, Move::new(3, 3, 0, 0), Player::White));
    assert_eq!(board.get(2, 2), None);
    assert_eq!(board.count(Player::Black), 0);
}

#[test]
fn evaluation_is_symmetric() {
    let board = Board::from_rows(&[
        "w.w...", //
        "......",
        "..B...",
        "......",
        "....b.",
        "...W.b",
    ])
    .unwrap();
    assert_eq!(evaluate(&board, Player::White), 2 * 2 + 5 - 5 - 2 * 2);
    assert_eq!(evaluate(&board, Player::White), -evaluate(&board, Player::Black));

    let start = Board::new(8).unwrap();
    assert_eq!(evaluate(&start, Player::White), 0);
}

#[test]
fn playout_result_compares_piece_counts() {
    let board = Board::from_rows(&[
        "w.w.", //
        "....",
        "....",
        ".B..",
    ])
    .unwrap();
    assert_eq!(playout_result(&board, Player::White), 1);
    assert_eq!(playout_result(&board, Player::Black), -1);
    assert_eq!(playout_result(&Board::new(6).unwrap(), Player::White), 0);
}

/// Plays `plies` random turns from the starting position, stopping early if
/// the side to move is stuck.
fn random_game(size: usize, seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    let mut player = Player::White;
    for _ in 0..plies {
        let moves = legal_moves(&board, player);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        resolve_capture_chain(&mut board, mv, player);
        player = player.other();
    }
    (board, player)
}

fn random_position() -> impl Strategy<Value = (Board, Player)> {
    (
        prop::sample::select(vec![4usize, 6, 8, 10]),
        any::<u64>(),
        0usize..60,
    )
        .prop_map(|(size, seed, plies)| random_game(size, seed, plies))
}

proptest! {
    #[test]
    fn capture_flag_matches_mandatory_moves((board, player) in random_position()) {
        let mandatory = legal_moves_with(&board, player, true);
        prop_assert_eq!(has_any_capture(&board, player), !mandatory.is_empty());
        if has_any_capture(&board, player) {
            prop_assert_eq!(legal_moves(&board, player), mandatory);
        }
    }

    #[test]
    fn pieces_stay_on_dark_squares((board, _player) in random_position()) {
        for color in [Player::White, Player::Black] {
            for (row, col, _) in board.squares(color) {
                prop_assert!(is_dark(row, col));
            }
        }
    }

    #[test]
    fn generated_moves_validate((board, player) in random_position()) {
        let mandatory = has_any_capture(&board, player);
        for mv in legal_moves(&board, player) {
            let legality = is_legal_move(&board, player, mv, mandatory);
            prop_assert!(legality.is_legal(), "{} rejected", mv);
            prop_assert_eq!(legality.is_capture(), mandatory);
        }
    }

    #[test]
    fn capture_chains_end_without_capture((board, player) in random_position()) {
        for mv in legal_moves(&board, player) {
            let mut child = board.clone();
            let before = child.count(player.other());
            let chain = resolve_capture_chain(&mut child, mv, player);
            prop_assert!(!chain.is_empty());
            prop_assert_eq!(chain[0], mv);
            if is_legal_move(&board, player, mv, true).is_capture() {
                let (row, col) = chain.last().unwrap().to();
                prop_assert!(!has_any_capture_from(&child, player, row, col));
                prop_assert_eq!(child.count(player.other()), before - chain.len());
            } else {
                prop_assert_eq!(chain.len(), 1);
            }
        }
    }

    #[test]
    fn promotion_happens_on_arrival((board, player) in random_position()) {
        let last_row = player.promotion_row(board.size());
        for mv in legal_moves(&board, player) {
            let mut child = board.clone();
            let was_king = board.get(mv.from_row, mv.from_col).map(|pc| pc.is_king());
            apply_move(&mut child, mv, player);
            let landed = child.get(mv.to_row, mv.to_col).unwrap();
            if mv.to_row == last_row || was_king == Some(true) {
                prop_assert!(landed.is_king());
            } else {
                prop_assert!(!landed.is_king());
            }
        }
    }
}
