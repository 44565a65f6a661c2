//! King rule
//!
//! One orthogonal step, inside the palace. The king shares the advisor's
//! palace box.

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    let (dx, dy) = leg.delta();
    let kind = leg.piece.kind;
    if dx.abs() + dy.abs() != 1 {
        return Err(XiangqiError::IllegalMovement { kind });
    }
    if !leg.piece.color.in_palace(leg.target) {
        return Err(XiangqiError::LeavePalace { kind });
    }
    Ok(())
}
