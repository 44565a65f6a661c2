//! Quantum Xiangqi rule engine
//!
//! Parses move notation, checks moves against classical Xiangqi geometry
//! and classifies them into the quantum move taxonomy that a simulation
//! collaborator executes.
//!
//! ## Module Organization
//!
//! - `notation` - move strings such as `a1b1`, `a1b1^c2`, `a1^b1c2`
//! - `board` - squares, piece arena, paths, FEN setup
//! - `rules` - per-kind classical rules
//! - `classify` - quantum move classification
//! - `api` - validation pipeline and game driver
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use qxiangqi_engine::{Game, ClassicalOnly, MoveType};
//!
//! let mut game = Game::new(ClassicalOnly);
//! let mv = game.apply_move("h9g7")?;
//! assert_eq!(mv.move_type, MoveType::Classical);
//! ```

pub mod api;
pub mod board;
pub mod classify;
pub mod constants;
pub mod error;
pub mod notation;
pub mod rules;
pub mod types;

pub use api::{
    get_game_state, validate_move, ClassicalOnly, ClassifiedMove, Game, GameOutcome, GameState,
    QuantumExecutor,
};
pub use board::{parse_fen, Board, PathPieces, Square};
pub use classify::classify_move;
pub use error::{ErrorCategory, XiangqiError, XiangqiResult};
pub use notation::{parse_move, MoveRequest};
pub use rules::check_classical_rule;
pub use types::*;
