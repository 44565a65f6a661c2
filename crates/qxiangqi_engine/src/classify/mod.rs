//! Quantum move classification
//!
//! Given a move that already passed the classical rules, decide which
//! quantum operation it is and with which variant. The decision only reads
//! occupancy and entanglement flags; the board is never modified.
//!
//! ## Decision table
//!
//! | sources | targets | path            | result                         |
//! |---------|---------|-----------------|--------------------------------|
//! | 1       | 1       | nothing quantum, no entangled endpoint | `CLASSICAL / UNSPECIFIED` |
//! | 1       | 1       | nothing quantum, entangled endpoint    | `JUMP / *`         |
//! | 1       | 1       | quantum squares | `SLIDE / *`                    |
//! | 1       | 1       | cannon over a platform onto an opponent | `CANNON_FIRE / CAPTURE` |
//! | 2       | 1       | -               | `MERGE_JUMP` or `MERGE_SLIDE`, `BASIC` |
//! | 1       | 2       | -               | `SPLIT_JUMP` or `SPLIT_SLIDE`, `BASIC` |
//!
//! The `*` variant follows the target square: empty is `BASIC`, the
//! mover's own colour is `EXCLUDED`, the opponent's is `CAPTURE`.
//!
//! Precondition errors (missing cannon platform, merge without
//! superposition, merge/split into occupied squares, cannon fire combined
//! with merge/split, king split) are raised before any classification.

use tracing::debug;

use crate::board::{Board, PathPieces};
use crate::error::{XiangqiError, XiangqiResult};
use crate::types::*;


/// Classify a parsed, classically legal move
///
/// `path_0` is the path of the first leg (`sources[0] -> targets[0]`),
/// `path_1` the path of the second leg of a merge (`sources[1] ->
/// targets[0]`) or split (`sources[0] -> targets[1]`). For a simple move
/// `path_1` is ignored.
pub fn classify_move(
    board: &Board,
    sources: &[Location],
    targets: &[Location],
    path_0: &PathPieces,
    path_1: &PathPieces,
) -> XiangqiResult<(MoveType, MoveVariant)> {
    let (Some(&source), Some(&target)) = (sources.first(), targets.first()) else {
        return Err(XiangqiError::InvalidFormat {
            input: format!("{sources:?} -> {targets:?}"),
        });
    };
    let piece = board.piece_at(source).ok_or(XiangqiError::EmptySource)?;

    let result = match (sources, targets) {
        ([_], [_]) => classify_simple(board, piece, source, target, path_0)?,
        ([_, second], [_]) => classify_merge(board, source, *second, target, path_0, path_1)?,
        ([_], [_, second]) => classify_split(board, piece, target, *second, path_0, path_1)?,
        _ => {
            return Err(XiangqiError::InvalidFormat {
                input: format!("{sources:?} -> {targets:?}"),
            })
        }
    };

    debug!(
        "[CLASSIFY] {:?} -> {:?}: {} / {}",
        sources
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>(),
        targets
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>(),
        result.0,
        result.1
    );
    Ok(result)
}

fn classify_simple(
    board: &Board,
    piece: Piece,
    source: Location,
    target: Location,
    path: &PathPieces,
) -> XiangqiResult<(MoveType, MoveVariant)> {
    let target_color = board.color_at(target);
    let opponent_target = target_color == Some(piece.color.opponent());
    let is_cannon = piece.kind == PieceType::Cannon;

    let move_type = if path.quantum.is_empty() {
        if path.classical.is_empty() && is_cannon && opponent_target {
            return Err(XiangqiError::CannonMissingPlatform);
        }
        if !board.is_entangled(source) && !board.is_entangled(target) {
            return Ok((MoveType::Classical, MoveVariant::Unspecified));
        }
        MoveType::Jump
    } else {
        MoveType::Slide
    };

    if is_cannon && (path.classical.len() == 1 || !path.quantum.is_empty()) && opponent_target {
        return Ok((MoveType::CannonFire, MoveVariant::Capture));
    }

    let variant = match target_color {
        None => MoveVariant::Basic,
        Some(color) if color == piece.color => MoveVariant::Excluded,
        Some(_) => MoveVariant::Capture,
    };
    Ok((move_type, variant))
}

fn classify_merge(
    board: &Board,
    first: Location,
    second: Location,
    target: Location,
    path_0: &PathPieces,
    path_1: &PathPieces,
) -> XiangqiResult<(MoveType, MoveVariant)> {
    if !board.is_entangled(first) || !board.is_entangled(second) {
        return Err(XiangqiError::MergeRequiresSuperposition);
    }
    // TODO: merge combined with EXCLUDED/CAPTURE, and cannon merge-fire.
    if !path_0.classical.is_empty() || !path_1.classical.is_empty() {
        return Err(XiangqiError::MergeWhileFire);
    }
    if !board.is_empty(target) {
        return Err(XiangqiError::MergeIntoOccupied);
    }
    let move_type = if path_0.quantum.is_empty() && path_1.quantum.is_empty() {
        MoveType::MergeJump
    } else {
        MoveType::MergeSlide
    };
    Ok((move_type, MoveVariant::Basic))
}

fn classify_split(
    board: &Board,
    piece: Piece,
    first: Location,
    second: Location,
    path_0: &PathPieces,
    path_1: &PathPieces,
) -> XiangqiResult<(MoveType, MoveVariant)> {
    if !path_0.classical.is_empty() || !path_1.classical.is_empty() {
        return Err(XiangqiError::SplitWhileFire);
    }
    if !board.is_empty(first) || !board.is_empty(second) {
        return Err(XiangqiError::SplitIntoOccupied);
    }
    if piece.kind == PieceType::King {
        return Err(XiangqiError::KingSplit);
    }
    let move_type = if path_0.quantum.is_empty() && path_1.quantum.is_empty() {
        MoveType::SplitJump
    } else {
        MoveType::SplitSlide
    };
    Ok((move_type, MoveVariant::Basic))
}
