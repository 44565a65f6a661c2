//! Cannon rule
//!
//! ## Cannon Movement Rules
//!
//! - Cannons move like rooks along a row or column
//! - A non-capturing move needs a clear path
//! - To capture, the cannon fires over exactly one piece (the platform)
//!   and lands on an opponent piece
//!
//! Only classical pieces count as platforms here. A leg whose path holds
//! entangled squares is left to the classifier, which decides whether it
//! is a fire.

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    if !leg.is_straight() {
        return Err(XiangqiError::IllegalMovement {
            kind: leg.piece.kind,
        });
    }

    if leg.classical_path.is_empty() {
        return Ok(());
    }
    if leg.classical_path.len() > 1 {
        return Err(XiangqiError::CannonFire);
    }
    match leg.target_piece {
        Some(target) if target.color == leg.piece.color => Err(XiangqiError::CannonFireSameColor),
        Some(_) => Ok(()),
        None => Err(XiangqiError::CannonFireEmpty),
    }
}
