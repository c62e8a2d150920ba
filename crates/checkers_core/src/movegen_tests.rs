use super::*;

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_startpos_moves() {
    let b = Board::new(8).unwrap();
    let moves = legal_moves(&b, Player::White);
    // Only the front row can step, and the edge man has a single square
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|mv| mv.from_row == 2 && mv.to_row == 3));
    assert!(!has_any_capture(&b, Player::White));
    assert_eq!(legal_moves(&b, Player::Black).len(), 7);
}

#[test]
fn test_enumeration_order_is_row_major() {
    let b = Board::new(8).unwrap();
    let moves = legal_moves(&b, Player::White);
    assert_eq!(moves[0], Move::new(2, 0, 3, 1));
    assert_eq!(moves[1], Move::new(2, 2, 3, 1));
    assert_eq!(moves[2], Move::new(2, 2, 3, 3));
}

#[test]
fn test_man_cannot_move_backward() {
    let b = board(&[
        "....", //
        ".w..",
        "....",
        "....",
    ]);
    let back = Move::new(1, 1, 0, 0);
    assert_eq!(is_legal_move(&b, Player::White, back, false), Legality::Illegal);
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(1, 1, 2, 2), false),
        Legality::Quiet
    );
}

#[test]
fn test_quiet_step_illegal_when_mandatory() {
    let b = Board::new(8).unwrap();
    let mv = Move::new(2, 2, 3, 3);
    assert_eq!(is_legal_move(&b, Player::White, mv, false), Legality::Quiet);
    assert_eq!(is_legal_move(&b, Player::White, mv, true), Legality::Illegal);
}

#[test]
fn test_invalid_input_is_illegal() {
    let b = Board::new(8).unwrap();
    let cases = [
        Move::new(2, 2, 8, 8),  // off board
        Move::new(3, 3, 4, 4),  // empty source
        Move::new(5, 1, 4, 0),  // opponent's piece
        Move::new(1, 1, 2, 2),  // occupied destination
        Move::new(2, 2, 3, 2),  // not diagonal
        Move::new(2, 2, 2, 2),  // zero distance
        Move::new(2, 2, 5, 5),  // man too far
    ];
    for mv in cases {
        assert_eq!(
            is_legal_move(&b, Player::White, mv, false),
            Legality::Illegal,
            "{mv}"
        );
    }
}

#[test]
fn test_man_jump_requires_enemy_midpoint() {
    let b = board(&[
        "w.w...", //
        ".b....",
        "......",
        "......",
        "......",
        "......",
    ]);
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(0, 0, 2, 2), true),
        Legality::Capture
    );
    // Midpoint (1,3) is empty
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(0, 2, 2, 4), false),
        Legality::Illegal
    );
    assert!(has_any_capture(&b, Player::White));
    // (0,2) can also jump (1,1) onto (2,0)
    let moves = legal_moves(&b, Player::White);
    assert_eq!(
        moves,
        vec![Move::new(0, 0, 2, 2), Move::new(0, 2, 2, 0)]
    );
}

#[test]
fn test_man_does_not_capture_backward() {
    let b = board(&[
        "......", //
        "......",
        "......",
        "...b..",
        "....w.",
        "......",
    ]);
    // Black moves toward row 0, the white man sits behind it
    assert!(!has_any_capture(&b, Player::Black));
    assert!(!has_any_capture_from(&b, Player::Black, 3, 3));
    assert_eq!(
        is_legal_move(&b, Player::Black, Move::new(3, 3, 5, 5), false),
        Legality::Illegal
    );
    // Likewise White cannot jump back over (3,3)
    assert!(!has_any_capture(&b, Player::White));
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(4, 4, 2, 2), false),
        Legality::Illegal
    );
}

#[test]
fn test_king_single_capture_on_small_board() {
    let b = board(&[
        "W...", //
        "....",
        "..b.",
        "....",
    ]);
    let moves = legal_moves(&b, Player::White);
    assert_eq!(moves, vec![Move::new(0, 0, 3, 3)]);
    assert_eq!(
        is_legal_move(&b, Player::White, moves[0], true),
        Legality::Capture
    );
}

#[test]
fn test_king_lands_on_every_square_beyond_enemy() {
    let b = board(&[
        "W.......", //
        "........",
        "..b.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let moves = legal_moves(&b, Player::White);
    let landings: Vec<_> = moves.iter().map(|mv| mv.to()).collect();
    assert_eq!(landings, vec![(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)]);
    assert!(moves
        .iter()
        .all(|&mv| is_legal_move(&b, Player::White, mv, true).is_capture()));
}

#[test]
fn test_king_blocked_by_second_piece() {
    let b = board(&[
        "W.......", //
        ".b......",
        "..b.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert!(!has_any_capture(&b, Player::White));
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(0, 0, 3, 3), false),
        Legality::Illegal
    );
    assert!(legal_moves(&b, Player::White).is_empty());
}

#[test]
fn test_king_blocked_by_own_piece() {
    let b = board(&[
        "W.......", //
        "........",
        "..w.....",
        "...b....",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert!(!has_any_capture_from(&b, Player::White, 0, 0));
    assert_eq!(
        is_legal_move(&b, Player::White, Move::new(0, 0, 4, 4), false),
        Legality::Illegal
    );
    // The man on (2,2) captures forward instead
    assert!(has_any_capture_from(&b, Player::White, 2, 2));
}

#[test]
fn test_king_free_moves_when_no_capture() {
    let b = board(&[
        "......", //
        "......",
        "..W...",
        "......",
        "......",
        "......",
    ]);
    let moves = legal_moves(&b, Player::White);
    // (-1,-1): 2 squares, (-1,1): 2, (1,-1): 2, (1,1): 3
    assert_eq!(moves.len(), 9);
    assert!(moves
        .iter()
        .all(|&mv| is_legal_move(&b, Player::White, mv, false) == Legality::Quiet));
    assert!(moves
        .iter()
        .all(|&mv| is_legal_move(&b, Player::White, mv, true) == Legality::Illegal));
}

#[test]
fn test_legal_moves_from_filters_origin() {
    let b = Board::new(8).unwrap();
    let moves = legal_moves_from(&b, Player::White, 2, 2, false);
    assert_eq!(moves, vec![Move::new(2, 2, 3, 1), Move::new(2, 2, 3, 3)]);
    assert!(legal_moves_from(&b, Player::White, 1, 1, false).is_empty());
}

#[test]
fn test_apply_move_captures_and_reports() {
    let mut b = board(&[
        "w.....", //
        ".b....",
        "......",
        "......",
        "......",
        "......",
    ]);
    assert!(apply_move(&mut b, Move::new(0, 0, 2, 2), Player::White));
    assert_eq!(b.get(0, 0), None);
    assert_eq!(b.get(1, 1), None);
    assert_eq!(b.get(2, 2), Some(Piece::man(Player::White)));
    assert_eq!(b.count(Player::Black), 0);
}

#[test]
fn test_apply_move_king_removes_first_enemy_only() {
    let mut b = board(&[
        "W.......", //
        "........",
        "..b.....",
        "........",
        "........",
        "........",
        "........",
        ".......b",
    ]);
    assert!(apply_move(&mut b, Move::new(0, 0, 5, 5), Player::White));
    assert_eq!(b.get(2, 2), None);
    assert_eq!(b.get(5, 5), Some(Piece::king(Player::White)));
    assert_eq!(b.get(7, 7), Some(Piece::man(Player::Black)));
}

#[test]
fn test_apply_move_ignores_bad_source() {
    let mut b = Board::new(8).unwrap();
    let before = b.clone();
    assert!(!apply_move(&mut b, Move::new(3, 3, 4, 4), Player::White));
    assert!(!apply_move(&mut b, Move::new(5, 1, 4, 0), Player::White));
    assert!(!apply_move(&mut b, Move::new(2, 2, 2, 2), Player::White));
    assert_eq!(b, before);
}

#[test]
fn test_promotion_on_farthest_row() {
    let mut b = board(&[
        "......", //
        "......",
        "......",
        "......",
        "w.....",
        "......",
    ]);
    assert!(!apply_move(&mut b, Move::new(4, 0, 5, 1), Player::White));
    assert_eq!(b.get(5, 1), Some(Piece::king(Player::White)));

    let mut b = board(&[
        "......", //
        ".b....",
        "......",
        "......",
        "......",
        "......",
    ]);
    apply_move(&mut b, Move::new(1, 1, 0, 2), Player::Black);
    assert_eq!(b.get(0, 2), Some(Piece::king(Player::Black)));
}

#[test]
fn test_king_is_never_demoted() {
    let mut b = board(&[
        "......", //
        "......",
        "......",
        "......",
        "......",
        "...W..",
    ]);
    apply_move(&mut b, Move::new(5, 3, 2, 0), Player::White);
    apply_move(&mut b, Move::new(2, 0, 5, 3), Player::White);
    assert_eq!(b.get(5, 3), Some(Piece::king(Player::White)));
}

#[test]
fn test_chain_double_jump() {
    let mut b = board(&[
        "w.......", //
        ".b......",
        "........",
        "...b....",
        "........",
        "........",
        "........",
        "........",
    ]);
    let chain = resolve_capture_chain(&mut b, Move::new(0, 0, 2, 2), Player::White);
    assert_eq!(chain, vec![Move::new(0, 0, 2, 2), Move::new(2, 2, 4, 4)]);
    assert_eq!(b.count(Player::Black), 0);
    assert_eq!(b.get(4, 4), Some(Piece::man(Player::White)));
}

#[test]
fn test_chain_quiet_move_is_single() {
    let mut b = Board::new(8).unwrap();
    let chain = resolve_capture_chain(&mut b, Move::new(2, 2, 3, 3), Player::White);
    assert_eq!(chain, vec![Move::new(2, 2, 3, 3)]);
    assert_eq!(b.get(3, 3), Some(Piece::man(Player::White)));
}

#[test]
fn test_chain_only_moves_landed_piece() {
    // After the first jump another white man could capture, but the chain
    // must continue with the piece that just landed (which cannot).
    let mut b = board(&[
        "w.......", //
        ".b......",
        "........",
        "........",
        "....w...",
        ".....b..",
        "........",
        "........",
    ]);
    let chain = resolve_capture_chain(&mut b, Move::new(0, 0, 2, 2), Player::White);
    assert_eq!(chain.len(), 1);
    assert_eq!(b.get(5, 5), Some(Piece::man(Player::Black)));
}

#[test]
fn test_chain_continues_after_promotion() {
    // The man jumps onto the last row, is crowned and keeps capturing as a
    // flying king.
    let mut b = board(&[
        "........", //
        "........",
        "........",
        "........",
        "........",
        ".w...b..",
        "..b.....",
        "........",
    ]);
    let chain = resolve_capture_chain(&mut b, Move::new(5, 1, 7, 3), Player::White);
    assert_eq!(chain, vec![Move::new(5, 1, 7, 3), Move::new(7, 3, 4, 6)]);
    assert_eq!(b.count(Player::Black), 0);
    assert_eq!(b.get(4, 6), Some(Piece::king(Player::White)));
    assert!(!has_any_capture_from(&b, Player::White, 4, 6));
}
