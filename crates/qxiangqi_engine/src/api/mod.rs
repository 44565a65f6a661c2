//! Public API for the rule engine
//!
//! ## Module Organization
//!
//! - `moves` - validation of a parsed move for a player (validate_move)
//! - `game` - turn handling and the quantum collaborator (Game, QuantumExecutor)
//! - `state` - serialisable snapshots (get_game_state)

mod game;
mod moves;
mod state;

pub use game::{ClassicalOnly, Game, GameOutcome, QuantumExecutor};
pub use moves::{validate_move, ClassifiedMove};
pub use state::{get_game_state, GameState, SquareSnapshot};
