//! Error types for the quantum Xiangqi engine
//!
//! Every rejected move surfaces as one [`XiangqiError`] whose display string
//! is the human-readable rule that was violated. Callers are expected to
//! report the message and ask for another move; none of these errors leave
//! the board modified.

use std::fmt;

use thiserror::Error;

use crate::types::PieceType;

/// Errors that can occur while parsing, validating or classifying a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XiangqiError {
    // ------------------------------------------------------------------
    // Notation
    // ------------------------------------------------------------------
    /// The move string does not match any accepted shape
    #[error("Invalid sources/targets string {input}.")]
    InvalidFormat { input: String },

    #[error("Two sources should not be the same.")]
    DuplicateSources,

    #[error("Two targets should not be the same.")]
    DuplicateTargets,

    #[error("Source and target should not be the same.")]
    SourceEqualsTarget,

    /// A square token falls outside `a0`..`i9`
    #[error("Invalid location string. Make sure they are from a0 to i9.")]
    InvalidLocation { token: String },

    // ------------------------------------------------------------------
    // Ownership and pairing
    // ------------------------------------------------------------------
    #[error("Could not move empty piece.")]
    EmptySource,

    #[error("Could not move the other player's piece.")]
    WrongPlayer,

    #[error("Two sources need to be the same type.")]
    SourcesDifferentType,

    #[error("Two sources need to be the same color.")]
    SourcesDifferentColor,

    #[error("Two targets need to be the same type.")]
    TargetsDifferentType,

    #[error("Two targets need to be the same color.")]
    TargetsDifferentColor,

    // ------------------------------------------------------------------
    // Classical geometry
    // ------------------------------------------------------------------
    #[error("The path is blocked.")]
    PathBlocked,

    #[error("The target place has classical piece with the same color.")]
    SameColorTarget,

    /// The offset is not a legal shape for this kind of piece
    #[error("{kind} cannot move like this.")]
    IllegalMovement { kind: PieceType },

    #[error("ELEPHANT cannot cross the river (i.e. the middle line).")]
    RiverCrossing,

    #[error("{kind} cannot leave the palace.")]
    LeavePalace { kind: PieceType },

    #[error("PAWN can only go forward before crossing the river (i.e. the middle line).")]
    PawnForwardOnly,

    #[error("PAWN can not move backward.")]
    PawnBackward,

    // ------------------------------------------------------------------
    // Cannon
    // ------------------------------------------------------------------
    /// More than one classical piece between the cannon and its target
    #[error("CANNON cannot fire like this.")]
    CannonFire,

    #[error("CANNON cannot fire to a piece with same color.")]
    CannonFireSameColor,

    #[error("CANNON cannot fire to an empty piece.")]
    CannonFireEmpty,

    #[error("CANNON could not fire/capture without a cannon platform.")]
    CannonMissingPlatform,

    // ------------------------------------------------------------------
    // Quantum preconditions
    // ------------------------------------------------------------------
    #[error("Both sources need to be in quantum state in order to merge.")]
    MergeRequiresSuperposition,

    #[error("Currently CANNON could not merge while fire.")]
    MergeWhileFire,

    #[error("Currently we could only merge into an empty piece.")]
    MergeIntoOccupied,

    #[error("Currently CANNON could not split while fire.")]
    SplitWhileFire,

    #[error("Currently we could only split into empty pieces.")]
    SplitIntoOccupied,

    #[error("King split is not supported currently.")]
    KingSplit,

    // ------------------------------------------------------------------
    // Setup and game flow
    // ------------------------------------------------------------------
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    #[error("Unexpected input to path_pieces().")]
    UnexpectedPath,

    #[error("The game is already over.")]
    GameOver,

    /// Raised by the quantum-execution collaborator
    #[error("Quantum simulation failed: {message}")]
    Simulation { message: String },
}

/// Coarse grouping of [`XiangqiError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or ambiguous move strings
    Notation,
    /// Empty sources, opponent pieces, mismatched split/merge pairs
    Ownership,
    /// Piece geometry, palace and river confinement, obstruction
    Geometry,
    /// Platform count and fire target problems
    Cannon,
    /// Merge/split preconditions and unsupported combinations
    Quantum,
    /// Board setup and game lifecycle
    Setup,
    /// Faults reported by the quantum collaborator
    Simulation,
}

impl XiangqiError {
    /// Which part of the rulebook the error belongs to
    pub fn category(&self) -> ErrorCategory {
        use XiangqiError::*;
        match self {
            InvalidFormat { .. }
            | DuplicateSources
            | DuplicateTargets
            | SourceEqualsTarget
            | InvalidLocation { .. } => ErrorCategory::Notation,
            EmptySource
            | WrongPlayer
            | SourcesDifferentType
            | SourcesDifferentColor
            | TargetsDifferentType
            | TargetsDifferentColor => ErrorCategory::Ownership,
            PathBlocked
            | SameColorTarget
            | IllegalMovement { .. }
            | RiverCrossing
            | LeavePalace { .. }
            | PawnForwardOnly
            | PawnBackward => ErrorCategory::Geometry,
            CannonFire | CannonFireSameColor | CannonFireEmpty | CannonMissingPlatform => {
                ErrorCategory::Cannon
            }
            MergeRequiresSuperposition
            | MergeWhileFire
            | MergeIntoOccupied
            | SplitWhileFire
            | SplitIntoOccupied
            | KingSplit => ErrorCategory::Quantum,
            InvalidFen { .. } | UnexpectedPath | GameOver => ErrorCategory::Setup,
            Simulation { .. } => ErrorCategory::Simulation,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Notation => "notation",
            ErrorCategory::Ownership => "ownership",
            ErrorCategory::Geometry => "geometry",
            ErrorCategory::Cannon => "cannon",
            ErrorCategory::Quantum => "quantum",
            ErrorCategory::Setup => "setup",
            ErrorCategory::Simulation => "simulation",
        };
        f.write_str(name)
    }
}

/// Result type alias for engine operations
pub type XiangqiResult<T> = Result<T, XiangqiError>;
