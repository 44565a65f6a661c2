//! Elephant rule
//!
//! Elephants move exactly two squares diagonally and never cross the river:
//! the landing row must stay on the elephant's own half of the board.

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    let (dx, dy) = leg.delta();
    if !(dx.abs() == 2 && dy.abs() == 2) {
        return Err(XiangqiError::IllegalMovement {
            kind: leg.piece.kind,
        });
    }
    if !leg.piece.color.on_home_side(leg.target.row) {
        return Err(XiangqiError::RiverCrossing);
    }
    Ok(())
}
