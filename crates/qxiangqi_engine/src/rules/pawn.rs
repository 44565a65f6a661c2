//! Pawn rule
//!
//! Pawns step one square. On their own half they may only advance; once
//! across the river they may also step sideways. They never retreat.
//! "Forward" is toward the opponent's back rank, see
//! [`Color::forward`](crate::types::Color::forward).

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    let (dx, dy) = leg.delta();
    if dx.abs() + dy.abs() != 1 {
        return Err(XiangqiError::IllegalMovement {
            kind: leg.piece.kind,
        });
    }

    let forward = leg.piece.color.forward();
    if dy == -forward {
        return Err(XiangqiError::PawnBackward);
    }
    if leg.piece.color.on_home_side(leg.source.row) && dy != forward {
        return Err(XiangqiError::PawnForwardOnly);
    }
    Ok(())
}
