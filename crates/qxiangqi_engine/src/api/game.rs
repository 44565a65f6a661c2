//! Game driver
//!
//! Owns the board and the side to move, applies classical moves itself and
//! hands every quantum move to a [`QuantumExecutor`].

use tracing::{debug, info, warn};

use crate::board::{parse_fen, Board};
use crate::constants::INITIAL_FEN;
use crate::error::{XiangqiError, XiangqiResult};
use crate::notation::parse_move;
use crate::types::*;

use super::moves::{validate_move, ClassifiedMove};

/// Collaborator that carries out non-classical moves
///
/// Implementations may change occupancy and entanglement through the
/// board's public API. Returning an error leaves the turn with the mover.
pub trait QuantumExecutor {
    fn execute(&mut self, board: &mut Board, mv: &ClassifiedMove) -> XiangqiResult<()>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "quantum-executor"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Executor for boards that never leave the classical world
///
/// Every quantum move is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassicalOnly;

impl QuantumExecutor for ClassicalOnly {
    fn execute(&mut self, _board: &mut Board, mv: &ClassifiedMove) -> XiangqiResult<()> {
        Err(XiangqiError::Simulation {
            message: format!("no simulator attached for {}", mv.move_type),
        })
    }

    fn name(&self) -> &str {
        "classical-only"
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Color,
}

#[derive(Debug, Clone)]
pub struct Game<E> {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) move_counter: u32,
    executor: E,
}

impl<E: QuantumExecutor> Game<E> {
    /// New game from the standard opening, RED to move
    pub fn new(executor: E) -> Self {
        Self {
            board: Board::initial(),
            current_player: Color::Red,
            outcome: None,
            move_counter: 0,
            executor,
        }
    }

    /// New game from a FEN position
    pub fn from_fen(fen: &str, executor: E) -> XiangqiResult<Self> {
        let (board, current_player) = parse_fen(fen)?;
        Ok(Self {
            board,
            current_player,
            outcome: None,
            move_counter: 0,
            executor,
        })
    }

    /// Reset to the standard opening position
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.current_player = Color::Red;
        self.outcome = None;
        self.move_counter = 0;
        self.executor.new_game();
        debug!("[GAME] reset to {}", INITIAL_FEN);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Validate without applying
    pub fn classify(&self, input: &str) -> XiangqiResult<ClassifiedMove> {
        let request = parse_move(input)?;
        validate_move(&self.board, self.current_player, &request)
    }

    /// Parse, validate and apply a move for the side to move
    ///
    /// Classical moves are applied here; a captured KING ends the game.
    /// Any other move type goes to the executor. The turn passes only when
    /// the move was applied.
    ///
    /// # Errors
    ///
    /// [`XiangqiError::GameOver`] once a king was taken, otherwise the
    /// first rule the move breaks or the executor's failure.
    pub fn apply_move(&mut self, input: &str) -> XiangqiResult<ClassifiedMove> {
        if self.outcome.is_some() {
            return Err(XiangqiError::GameOver);
        }

        let mv = match self.classify(input) {
            Ok(mv) => mv,
            Err(err) => {
                warn!(
                    "[GAME] {} rejected for {} ({}): {}",
                    input,
                    self.current_player,
                    err.category(),
                    err
                );
                return Err(err);
            }
        };

        if mv.move_type.is_classical() {
            self.apply_classical(&mv);
        } else if let Err(err) = self.executor.execute(&mut self.board, &mv) {
            warn!("[GAME] {} failed {}: {}", self.executor.name(), input, err);
            return Err(err);
        }

        debug!(
            "[GAME] {} played {} as {} / {}",
            self.current_player, input, mv.move_type, mv.variant
        );
        self.move_counter += 1;
        if self.outcome.is_none() {
            self.current_player = self.current_player.opponent();
        }
        Ok(mv)
    }

    fn apply_classical(&mut self, mv: &ClassifiedMove) {
        let captured = self
            .board
            .relocate(mv.source(), mv.target())
            .and_then(|id| self.board.piece(id));

        if let Some(piece) = captured {
            debug!(
                "[GAME] {} captured {} {}",
                self.current_player, piece.color, piece.kind
            );
            if piece.kind == PieceType::King {
                info!("[GAME] {} wins", self.current_player);
                self.outcome = Some(GameOutcome {
                    winner: self.current_player,
                });
            }
        }
    }
}

impl Default for Game<ClassicalOnly> {
    fn default() -> Self {
        Self::new(ClassicalOnly)
    }
}
