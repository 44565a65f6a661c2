//! Board representation
//!
//! The board is a fixed `9 x 10` array of [`Square`]s indexed by
//! `(col, row)`, plus an arena of [`Piece`]s. A square owns at most one
//! reference into the arena and an entanglement flag that is independent of
//! occupancy: a square may be entangled while empty.
//!
//! Moving a piece is an explicit transfer of its [`PieceId`] from one square
//! to another; the source square becomes empty. A piece in superposition is
//! represented by several squares holding the same id.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::*;
use crate::error::{XiangqiError, XiangqiResult};
use crate::types::*;

/// One intersection of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    piece: Option<PieceId>,
    pub is_entangled: bool,
}

impl Square {
    pub fn piece_id(&self) -> Option<PieceId> {
        self.piece
    }

    pub fn state(&self) -> SquareState {
        if self.piece.is_some() {
            SquareState::Occupied
        } else {
            SquareState::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// Occupied squares strictly between a source and a target
///
/// `classical` holds squares with a piece and no entanglement, `quantum`
/// holds entangled squares whether or not they hold a piece. Empty
/// classical squares are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPieces {
    pub classical: Vec<Location>,
    pub quantum: Vec<Location>,
}

impl PathPieces {
    pub fn new(classical: Vec<Location>, quantum: Vec<Location>) -> Self {
        Self { classical, quantum }
    }

    /// Path with nothing in it
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn is_clear(&self) -> bool {
        self.classical.is_empty() && self.quantum.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_ROWS]; BOARD_COLS],
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [[Square::default(); BOARD_ROWS]; BOARD_COLS],
            pieces: Vec::with_capacity(32),
        }
    }

    /// Standard opening position
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let back = [
            PieceType::Rook,
            PieceType::Horse,
            PieceType::Elephant,
            PieceType::Advisor,
            PieceType::King,
            PieceType::Advisor,
            PieceType::Elephant,
            PieceType::Horse,
            PieceType::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            board.place_at(col, 9, Piece::new(Color::Red, kind));
            board.place_at(col, 0, Piece::new(Color::Black, kind));
        }
        for col in [1, 7] {
            board.place_at(col, 7, Piece::new(Color::Red, PieceType::Cannon));
            board.place_at(col, 2, Piece::new(Color::Black, PieceType::Cannon));
        }
        for col in (0..BOARD_COLS as u8).step_by(2) {
            board.place_at(col, 6, Piece::new(Color::Red, PieceType::Pawn));
            board.place_at(col, 3, Piece::new(Color::Black, PieceType::Pawn));
        }
        board
    }

    /// Parse the piece placement of a FEN string
    pub fn from_fen(fen: &str) -> XiangqiResult<Self> {
        parse_fen(fen).map(|(board, _)| board)
    }

    fn place_at(&mut self, col: u8, row: u8, piece: Piece) {
        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.squares[col as usize][row as usize] = Square {
            piece: Some(id),
            is_entangled: false,
        };
    }

    pub fn square(&self, loc: Location) -> &Square {
        &self.squares[loc.col as usize][loc.row as usize]
    }

    fn square_mut(&mut self, loc: Location) -> &mut Square {
        &mut self.squares[loc.col as usize][loc.row as usize]
    }

    /// Arena lookup; `None` for ids from another board
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id.0).copied()
    }

    pub fn piece_at(&self, loc: Location) -> Option<Piece> {
        self.square(loc).piece.and_then(|id| self.piece(id))
    }

    pub fn color_at(&self, loc: Location) -> Option<Color> {
        self.piece_at(loc).map(|p| p.color)
    }

    pub fn kind_at(&self, loc: Location) -> Option<PieceType> {
        self.piece_at(loc).map(|p| p.kind)
    }

    pub fn is_empty(&self, loc: Location) -> bool {
        self.square(loc).is_empty()
    }

    pub fn is_entangled(&self, loc: Location) -> bool {
        self.square(loc).is_entangled
    }

    pub fn set_entangled(&mut self, loc: Location, entangled: bool) {
        self.square_mut(loc).is_entangled = entangled;
    }

    /// Put a new piece on `loc`, replacing whatever was there
    ///
    /// A replaced piece that no other square references gives up its arena
    /// slot to the new one.
    pub fn place(&mut self, loc: Location, piece: Piece) -> PieceId {
        let reusable = self
            .square(loc)
            .piece
            .filter(|&id| self.locations_of(id).len() == 1);
        match reusable {
            Some(id) => {
                self.pieces[id.0] = piece;
                *self.square_mut(loc) = Square {
                    piece: Some(id),
                    is_entangled: false,
                };
                id
            }
            None => {
                self.place_at(loc.col, loc.row, piece);
                PieceId(self.pieces.len() - 1)
            }
        }
    }

    /// Empty `loc` and drop its entanglement flag
    pub fn clear(&mut self, loc: Location) {
        *self.square_mut(loc) = Square::default();
    }

    /// Let `to` also reference the piece at `from`, copying its flag
    ///
    /// This is how a split records presence on a second square. `from` is
    /// left untouched.
    pub fn share(&mut self, from: Location, to: Location) {
        let square = *self.square(from);
        *self.square_mut(to) = square;
    }

    /// Transfer the piece and flag at `from` to `to`, emptying `from`
    ///
    /// Returns the id previously held by `to`, if any.
    pub fn relocate(&mut self, from: Location, to: Location) -> Option<PieceId> {
        if from == to {
            return None;
        }
        let moving = *self.square(from);
        let displaced = self.square(to).piece;
        *self.square_mut(to) = moving;
        self.clear(from);
        trace!("[BOARD] relocated {} -> {}", from, to);
        displaced
    }

    /// Every square currently referencing `id`
    pub fn locations_of(&self, id: PieceId) -> Vec<Location> {
        Self::locations()
            .filter(|&loc| self.square(loc).piece == Some(id))
            .collect()
    }

    /// All 90 locations, column-major
    pub fn locations() -> impl Iterator<Item = Location> {
        (0..BOARD_COLS as u8)
            .flat_map(|col| (0..BOARD_ROWS as u8).map(move |row| Location { col, row }))
    }

    /// Occupied squares with their piece and entanglement flag
    pub fn occupied(&self) -> impl Iterator<Item = (Location, Piece, bool)> + '_ {
        Self::locations().filter_map(move |loc| {
            let square = self.square(loc);
            square
                .piece
                .and_then(|id| self.piece(id))
                .map(|piece| (loc, piece, square.is_entangled))
        })
    }

    /// Squares strictly between `source` and `target` that matter to the
    /// rules, split into classical and quantum occupants
    ///
    /// - single steps and one-step diagonals have no path
    /// - two-step diagonals report the elephant eye
    /// - straight lines report every intermediate square
    /// - L-jumps report the horse leg
    pub fn path_pieces(&self, source: Location, target: Location) -> XiangqiResult<PathPieces> {
        let (dx, dy) = source.delta(target);
        let (sx, sy) = (dx.signum(), dy.signum());

        if dx.abs() + dy.abs() <= 1 || (dx.abs() == 1 && dy.abs() == 1) {
            return Ok(PathPieces::default());
        }

        let between: Vec<Location> = if dx.abs() == dy.abs() {
            source.offset(sx, sy).into_iter().collect()
        } else if dx == 0 {
            (1..dy.abs())
                .filter_map(|i| source.offset(0, sy * i))
                .collect()
        } else if dy == 0 {
            (1..dx.abs())
                .filter_map(|i| source.offset(sx * i, 0))
                .collect()
        } else if dx.abs() == 2 && dy.abs() == 1 {
            source.offset(sx, 0).into_iter().collect()
        } else if dx.abs() == 1 && dy.abs() == 2 {
            source.offset(0, sy).into_iter().collect()
        } else {
            return Err(XiangqiError::UnexpectedPath);
        };

        let mut path = PathPieces::default();
        for loc in between {
            let square = self.square(loc);
            if square.is_entangled {
                path.quantum.push(loc);
            } else if !square.is_empty() {
                path.classical.push(loc);
            }
        }
        Ok(path)
    }
}

/// Parse a FEN string into a board and the colour to move
///
/// Ranks are listed from row 9 down to row 0; upper-case letters are RED.
/// The side field is optional and defaults to RED.
pub fn parse_fen(fen: &str) -> XiangqiResult<(Board, Color)> {
    let invalid = |reason: String| XiangqiError::InvalidFen { reason };

    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| invalid("empty string".to_string()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_ROWS {
        return Err(invalid(format!(
            "expected {BOARD_ROWS} ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let row = (BOARD_ROWS - 1 - i) as u8;
        let mut col: usize = 0;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10) {
                col += run as usize;
            } else {
                let kind = PieceType::from_fen_char(ch)
                    .ok_or_else(|| invalid(format!("unknown piece letter '{ch}'")))?;
                if col >= BOARD_COLS {
                    return Err(invalid(format!("too many files on rank {row}")));
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::Red
                } else {
                    Color::Black
                };
                board.place_at(col as u8, row, Piece::new(color, kind));
                col += 1;
            }
            if col > BOARD_COLS {
                return Err(invalid(format!("too many files on rank {row}")));
            }
        }
        if col != BOARD_COLS {
            return Err(invalid(format!("not enough files on rank {row}")));
        }
    }

    let side = match fields.next().and_then(|f| f.chars().next()) {
        None | Some('w') | Some('r') => Color::Red,
        Some('b') => Color::Black,
        Some(other) => return Err(invalid(format!("unknown side to move '{other}'"))),
    };

    Ok((board, side))
}
