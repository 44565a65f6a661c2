//! Horse rule
//!
//! Horses jump one square orthogonally and one diagonally outward, giving
//! the familiar L-shape. The leg square is reported by
//! [`Board::path_pieces`](crate::board::Board::path_pieces); a classical
//! piece there blocks the jump through the shared path check.

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    let (dx, dy) = leg.delta();
    let (dx, dy) = (dx.abs(), dy.abs());
    if !((dx == 2 && dy == 1) || (dx == 1 && dy == 2)) {
        return Err(XiangqiError::IllegalMovement {
            kind: leg.piece.kind,
        });
    }
    Ok(())
}
