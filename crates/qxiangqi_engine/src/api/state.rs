//! Game state queries

use serde::{Deserialize, Serialize};

use crate::types::*;

use super::game::{Game, QuantumExecutor};

/// One occupied square in a state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareSnapshot {
    pub location: Location,
    pub piece: Piece,
    pub entangled: bool,
}

/// Serialisable view of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub to_move: Color,
    pub move_counter: u32,
    pub winner: Option<Color>,
    pub pieces: Vec<SquareSnapshot>,
    /// Squares flagged entangled while holding nothing
    pub empty_entangled: Vec<Location>,
}

/// Snapshot the board and turn of `game`
pub fn get_game_state<E: QuantumExecutor>(game: &Game<E>) -> GameState {
    let board = game.board();
    let pieces = board
        .occupied()
        .map(|(location, piece, entangled)| SquareSnapshot {
            location,
            piece,
            entangled,
        })
        .collect();
    let empty_entangled = crate::board::Board::locations()
        .filter(|&loc| board.is_empty(loc) && board.is_entangled(loc))
        .collect();

    GameState {
        to_move: game.current_player,
        move_counter: game.move_counter,
        winner: game.outcome.map(|o| o.winner),
        pieces,
        empty_entangled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClassicalOnly;

    #[test]
    fn test_initial_state() {
        let game = Game::new(ClassicalOnly);
        let state = get_game_state(&game);
        assert_eq!(state.to_move, Color::Red);
        assert_eq!(state.pieces.len(), 32);
        assert!(state.pieces.iter().all(|s| !s.entangled));
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_empty_entangled_squares_are_reported() {
        let mut game = Game::new(ClassicalOnly);
        let e4: Location = "e4".parse().unwrap();
        game.board_mut().set_entangled(e4, true);
        let state = get_game_state(&game);
        assert_eq!(state.empty_entangled, vec![e4]);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["to_move"], "red");
        assert_eq!(json["empty_entangled"][0], "e4");
    }
}
