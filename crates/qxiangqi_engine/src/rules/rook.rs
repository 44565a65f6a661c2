//! Rook rule
//!
//! Rooks slide any distance along a row or a column. Obstruction is
//! checked once for all sliding kinds in
//! [`check_classical_rule`](super::check_classical_rule), so only the
//! direction matters here.

use super::Leg;
use crate::error::{XiangqiError, XiangqiResult};

pub fn check(leg: &Leg<'_>) -> XiangqiResult<()> {
    if !leg.is_straight() {
        return Err(XiangqiError::IllegalMovement {
            kind: leg.piece.kind,
        });
    }
    Ok(())
}
