//! Move validation
//!
//! Runs a parsed move through the ownership checks, the classical rules for
//! every leg, and finally the classifier.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PathPieces};
use crate::classify::classify_move;
use crate::error::{XiangqiError, XiangqiResult};
use crate::notation::MoveRequest;
use crate::rules::check_classical_rule;
use crate::types::*;

/// A validated move, ready for the quantum collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedMove {
    pub move_type: MoveType,
    pub variant: MoveVariant,
    pub sources: Vec<Location>,
    pub targets: Vec<Location>,
    /// Path of each leg; the second is clear for simple moves
    pub paths: [PathPieces; 2],
}

impl ClassifiedMove {
    pub fn source(&self) -> Location {
        self.sources[0]
    }

    pub fn target(&self) -> Location {
        self.targets[0]
    }
}

/// The second leg of a two-square move, if any
fn second_leg(request: &MoveRequest) -> Option<(Location, Location)> {
    match (request.sources.as_slice(), request.targets.as_slice()) {
        ([_, second], [target]) => Some((*second, *target)),
        ([source], [_, second]) => Some((*source, *second)),
        _ => None,
    }
}

/// Path of one leg, after checking the leg against the classical rules
///
/// Offsets that are no line, diagonal or L-jump have no path; they still
/// go through the rule checker so the piece's own movement error surfaces.
fn checked_leg(board: &Board, from: Location, to: Location) -> XiangqiResult<PathPieces> {
    match board.path_pieces(from, to) {
        Ok(path) => {
            check_classical_rule(board, from, to, &path.classical)?;
            Ok(path)
        }
        Err(XiangqiError::UnexpectedPath) => {
            check_classical_rule(board, from, to, &[])?;
            Err(XiangqiError::UnexpectedPath)
        }
        Err(err) => Err(err),
    }
}

fn check_pairing(board: &Board, request: &MoveRequest) -> XiangqiResult<()> {
    if let [first, second] = request.sources.as_slice() {
        if board.kind_at(*first) != board.kind_at(*second) {
            return Err(XiangqiError::SourcesDifferentType);
        }
        if board.color_at(*first) != board.color_at(*second) {
            return Err(XiangqiError::SourcesDifferentColor);
        }
    }
    if let [first, second] = request.targets.as_slice() {
        if board.kind_at(*first) != board.kind_at(*second) {
            return Err(XiangqiError::TargetsDifferentType);
        }
        if board.color_at(*first) != board.color_at(*second) {
            return Err(XiangqiError::TargetsDifferentColor);
        }
    }
    Ok(())
}

/// Validate and classify `request` for `player`
///
/// # Errors
///
/// The first violated rule, in this order: empty source, wrong player,
/// mismatched source or target pair, classical rules on leg 0 then leg 1,
/// classification preconditions.
///
/// # Examples
///
/// ```rust,ignore
/// let request = parse_move("h9g7")?;
/// let mv = validate_move(&Board::initial(), Color::Red, &request)?;
/// assert_eq!(mv.move_type, MoveType::Classical);
/// ```
pub fn validate_move(
    board: &Board,
    player: Color,
    request: &MoveRequest,
) -> XiangqiResult<ClassifiedMove> {
    let source = *request.sources.first().ok_or(XiangqiError::EmptySource)?;
    let target = *request.targets.first().ok_or(XiangqiError::EmptySource)?;

    let piece = board.piece_at(source).ok_or(XiangqiError::EmptySource)?;
    if piece.color != player {
        return Err(XiangqiError::WrongPlayer);
    }
    check_pairing(board, request)?;

    let path_0 = checked_leg(board, source, target)?;
    let path_1 = match second_leg(request) {
        Some((from, to)) => checked_leg(board, from, to)?,
        None => PathPieces::clear(),
    };

    let (move_type, variant) =
        classify_move(board, &request.sources, &request.targets, &path_0, &path_1)?;

    Ok(ClassifiedMove {
        move_type,
        variant,
        sources: request.sources.clone(),
        targets: request.targets.clone(),
        paths: [path_0, path_1],
    })
}
