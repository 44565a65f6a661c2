//! Classical rule checking
//!
//! Validates one source -> target leg against standard Xiangqi geometry
//! using the piece found on the source square. Each piece kind has its own
//! stateless rule function in a submodule; [`check_classical_rule`] runs the
//! checks shared by every kind and then dispatches through [`RULES`].
//!
//! ## Shared checks, in order
//!
//! 1. the source square must hold a piece
//! 2. a non-cannon leg may not pass any classical piece
//! 3. the target may not hold a classical piece of the mover's colour
//!
//! Entangled squares never block and never count as friendly targets; they
//! are the classifier's business.

use tracing::trace;

use crate::board::Board;
use crate::error::{XiangqiError, XiangqiResult};
use crate::types::*;

mod advisor;
mod cannon;
mod elephant;
mod horse;
mod king;
mod pawn;
mod rook;

#[cfg(test)]
mod tests;

/// Everything a per-kind rule needs to judge one leg
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    pub piece: Piece,
    pub source: Location,
    pub target: Location,
    /// Piece on the target square, entangled or not
    pub target_piece: Option<Piece>,
    /// Classical pieces strictly between source and target
    pub classical_path: &'a [Location],
}

impl Leg<'_> {
    /// `(dcol, drow)` from source to target
    pub fn delta(&self) -> (i8, i8) {
        self.source.delta(self.target)
    }

    pub fn is_straight(&self) -> bool {
        let (dx, dy) = self.delta();
        dx == 0 || dy == 0
    }
}

/// Signature shared by every per-kind rule
pub type RuleFn = fn(&Leg<'_>) -> XiangqiResult<()>;

/// Per-kind rules, indexed by [`PieceType::index`]
pub const RULES: [RuleFn; 7] = [
    rook::check,
    horse::check,
    elephant::check,
    advisor::check,
    king::check,
    cannon::check,
    pawn::check,
];

pub fn rule_for(kind: PieceType) -> RuleFn {
    RULES[kind.index()]
}

/// Check that moving the piece on `source` to `target` obeys classical rules
///
/// `classical_path` lists the classical (non-entangled) pieces strictly
/// between the two squares, as returned by
/// [`Board::path_pieces`](crate::board::Board::path_pieces).
pub fn check_classical_rule(
    board: &Board,
    source: Location,
    target: Location,
    classical_path: &[Location],
) -> XiangqiResult<()> {
    let piece = board.piece_at(source).ok_or(XiangqiError::EmptySource)?;

    if !classical_path.is_empty() && piece.kind != PieceType::Cannon {
        return Err(XiangqiError::PathBlocked);
    }

    let target_piece = board.piece_at(target);
    if !board.is_entangled(target) && target_piece.map(|p| p.color) == Some(piece.color) {
        return Err(XiangqiError::SameColorTarget);
    }

    let leg = Leg {
        piece,
        source,
        target,
        target_piece,
        classical_path,
    };
    trace!("[RULES] {} {} -> {}", piece.kind, source, target);
    rule_for(piece.kind)(&leg)
}
