//! Test suite for classical rule checking
//!
//! All scenarios start from the opening position and adjust a few squares.
//!
//! # Test Organization
//!
//! - `test_shared_*` - checks run before per-kind dispatch
//! - `test_<kind>_*` - geometry, palace and river rules per piece kind
//! - `test_dispatch_*` - the per-kind lookup table

use super::*;
use crate::board::Board;

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn check(board: &Board, source: &str, target: &str, path: &[&str]) -> XiangqiResult<()> {
    let path: Vec<Location> = path.iter().map(|s| loc(s)).collect();
    check_classical_rule(board, loc(source), loc(target), &path)
}

// ============================================================================
// Shared Checks
// ============================================================================

#[test]
fn test_shared_empty_source() {
    let board = Board::initial();
    assert_eq!(check(&board, "a1", "b1", &[]), Err(XiangqiError::EmptySource));
}

#[test]
fn test_shared_path_blocked_by_classical_piece() {
    //! A classical piece between source and target blocks every
    //! non-cannon leg, whatever the direction.
    let board = Board::initial();
    assert_eq!(
        check(&board, "a0", "a4", &["a3"]),
        Err(XiangqiError::PathBlocked)
    );
    assert_eq!(
        check(&board, "i9", "i5", &["i6"]),
        Err(XiangqiError::PathBlocked)
    );
}

#[test]
fn test_shared_path_blocked_along_a_rank() {
    let mut board = Board::initial();
    board.relocate(loc("a0"), loc("a4"));
    board.place(loc("c4"), Piece::new(Color::Red, PieceType::Pawn));
    let path = board.path_pieces(loc("a4"), loc("e4")).unwrap();
    assert_eq!(path.classical, vec![loc("c4")]);
    assert_eq!(
        check_classical_rule(&board, loc("a4"), loc("e4"), &path.classical),
        Err(XiangqiError::PathBlocked)
    );
    // Same obstruction, travelling the other way
    board.relocate(loc("a4"), loc("e4"));
    let path = board.path_pieces(loc("e4"), loc("a4")).unwrap();
    assert_eq!(path.classical, vec![loc("c4")]);
    assert_eq!(
        check_classical_rule(&board, loc("e4"), loc("a4"), &path.classical),
        Err(XiangqiError::PathBlocked)
    );
}

#[test]
fn test_shared_same_color_target() {
    let board = Board::initial();
    assert_eq!(
        check(&board, "a0", "a3", &[]),
        Err(XiangqiError::SameColorTarget)
    );
}

#[test]
fn test_shared_entangled_friendly_target_is_not_rejected() {
    let mut board = Board::initial();
    board.set_entangled(loc("a3"), true);
    assert_eq!(check(&board, "a0", "a3", &[]), Ok(()));
}

// ============================================================================
// Rook
// ============================================================================

#[test]
fn test_rook_straight_move() {
    let board = Board::initial();
    assert_eq!(check(&board, "a0", "a2", &[]), Ok(()));
    assert_eq!(check(&board, "a0", "a1", &[]), Ok(()));
}

#[test]
fn test_rook_cannot_move_diagonally() {
    let board = Board::initial();
    let err = check(&board, "a0", "b1", &[]).unwrap_err();
    assert_eq!(err.to_string(), "ROOK cannot move like this.");
}

// ============================================================================
// Horse
// ============================================================================

#[test]
fn test_horse_l_shape() {
    let board = Board::initial();
    assert_eq!(check(&board, "b0", "c2", &[]), Ok(()));
    assert_eq!(check(&board, "h9", "g7", &[]), Ok(()));
    assert_eq!(
        check(&board, "b0", "c1", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::Horse
        })
    );
}

#[test]
fn test_horse_leg_blocked() {
    //! b0 -> d1 runs through c0, where the black elephant stands.
    let board = Board::initial();
    let path = board.path_pieces(loc("b0"), loc("d1")).unwrap();
    assert_eq!(
        check_classical_rule(&board, loc("b0"), loc("d1"), &path.classical),
        Err(XiangqiError::PathBlocked)
    );
}

// ============================================================================
// Elephant
// ============================================================================

#[test]
fn test_elephant_diagonal() {
    let board = Board::initial();
    assert_eq!(check(&board, "c0", "e2", &[]), Ok(()));
    assert_eq!(
        check(&board, "c0", "e1", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::Elephant
        })
    );
}

#[test]
fn test_elephant_eye_blocked() {
    //! A classical piece on the eye square stops the elephant, whichever
    //! diagonal it takes.
    let mut board = Board::initial();
    board.place(loc("d1"), Piece::new(Color::Red, PieceType::Pawn));
    let path = board.path_pieces(loc("c0"), loc("e2")).unwrap();
    assert_eq!(path.classical, vec![loc("d1")]);
    assert_eq!(
        check_classical_rule(&board, loc("c0"), loc("e2"), &path.classical),
        Err(XiangqiError::PathBlocked)
    );

    board.place(loc("f8"), Piece::new(Color::Black, PieceType::Pawn));
    let path = board.path_pieces(loc("g9"), loc("e7")).unwrap();
    assert_eq!(path.classical, vec![loc("f8")]);
    assert_eq!(
        check_classical_rule(&board, loc("g9"), loc("e7"), &path.classical),
        Err(XiangqiError::PathBlocked)
    );
}

#[test]
fn test_elephant_cannot_cross_river_either_color() {
    let mut board = Board::initial();
    board.place(loc("g4"), Piece::new(Color::Black, PieceType::Elephant));
    assert_eq!(
        check(&board, "g4", "i6", &[]),
        Err(XiangqiError::RiverCrossing)
    );

    board.place(loc("c5"), Piece::new(Color::Red, PieceType::Elephant));
    assert_eq!(
        check(&board, "c5", "e3", &[]),
        Err(XiangqiError::RiverCrossing)
    );
    assert_eq!(check(&board, "c5", "e7", &[]), Ok(()));
}

// ============================================================================
// Advisor
// ============================================================================

#[test]
fn test_advisor_diagonal_step() {
    let board = Board::initial();
    assert_eq!(check(&board, "d9", "e8", &[]), Ok(()));
    assert_eq!(
        check(&board, "d9", "d8", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::Advisor
        })
    );
}

#[test]
fn test_advisor_cannot_leave_palace() {
    let board = Board::initial();
    let err = check(&board, "d0", "c1", &[]).unwrap_err();
    assert_eq!(err.to_string(), "ADVISOR cannot leave the palace.");
    assert_eq!(
        check(&board, "f9", "g8", &[]),
        Err(XiangqiError::LeavePalace {
            kind: PieceType::Advisor
        })
    );
}

// ============================================================================
// King
// ============================================================================

#[test]
fn test_king_orthogonal_step() {
    let board = Board::initial();
    assert_eq!(check(&board, "e9", "e8", &[]), Ok(()));
    assert_eq!(
        check(&board, "e9", "d8", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::King
        })
    );
}

#[test]
fn test_king_cannot_leave_palace() {
    let mut board = Board::initial();
    board.clear(loc("c9"));
    board.relocate(loc("e9"), loc("d9"));
    assert_eq!(
        check(&board, "d9", "c9", &[]),
        Err(XiangqiError::LeavePalace {
            kind: PieceType::King
        })
    );
}

// ============================================================================
// Cannon
// ============================================================================

#[test]
fn test_cannon_moves_like_rook() {
    let board = Board::initial();
    assert_eq!(check(&board, "b7", "b4", &[]), Ok(()));
    assert_eq!(
        check(&board, "b7", "a8", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::Cannon
        })
    );
}

#[test]
fn test_cannon_fires_over_one_platform() {
    let board = Board::initial();
    assert_eq!(check(&board, "b2", "b9", &["b7"]), Ok(()));
    assert_eq!(
        check(&board, "b2", "b9", &["b5", "b7"]),
        Err(XiangqiError::CannonFire)
    );
}

#[test]
fn test_cannon_fire_targets() {
    //! The target may be entangled, but it still has to hold an opponent
    //! piece for the cannon to fire.
    let mut board = Board::initial();
    board.relocate(loc("b2"), loc("b3"));
    board.set_entangled(loc("e3"), true);
    assert_eq!(
        check(&board, "b3", "e3", &["c3"]),
        Err(XiangqiError::CannonFireSameColor)
    );
    assert_eq!(
        check(&board, "b3", "d3", &["c3"]),
        Err(XiangqiError::CannonFireEmpty)
    );
}

// ============================================================================
// Pawn
// ============================================================================

#[test]
fn test_pawn_forward_step() {
    let board = Board::initial();
    assert_eq!(check(&board, "a6", "a5", &[]), Ok(()));
    assert_eq!(check(&board, "g3", "g4", &[]), Ok(()));
    assert_eq!(
        check(&board, "a6", "a4", &[]),
        Err(XiangqiError::IllegalMovement {
            kind: PieceType::Pawn
        })
    );
}

#[test]
fn test_pawn_sideways_before_river() {
    let board = Board::initial();
    assert_eq!(
        check(&board, "a6", "b6", &[]),
        Err(XiangqiError::PawnForwardOnly)
    );
    assert_eq!(
        check(&board, "g3", "h3", &[]),
        Err(XiangqiError::PawnForwardOnly)
    );
}

#[test]
fn test_pawn_never_backward() {
    let board = Board::initial();
    assert_eq!(
        check(&board, "a6", "a7", &[]),
        Err(XiangqiError::PawnBackward)
    );
    assert_eq!(
        check(&board, "g3", "g2", &[]),
        Err(XiangqiError::PawnBackward)
    );
}

#[test]
fn test_pawn_sideways_after_river() {
    let mut board = Board::initial();
    board.relocate(loc("c6"), loc("c4"));
    assert_eq!(check(&board, "c4", "b4", &[]), Ok(()));
    assert_eq!(check(&board, "c4", "d4", &[]), Ok(()));
    assert_eq!(
        check(&board, "c4", "c5", &[]),
        Err(XiangqiError::PawnBackward)
    );
}

// ============================================================================
// Dispatch Table
// ============================================================================

#[test]
fn test_dispatch_table_matches_kinds() {
    //! Every kind must be routed to its own rule: a knight-leap is only
    //! legal for the horse.
    let source = loc("e4");
    let target = loc("f6");
    for kind in PieceType::ALL {
        let leg = Leg {
            piece: Piece::new(Color::Black, kind),
            source,
            target,
            target_piece: None,
            classical_path: &[],
        };
        let result = rule_for(kind)(&leg);
        if kind == PieceType::Horse {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(result, Err(XiangqiError::IllegalMovement { kind }));
        }
    }
}
