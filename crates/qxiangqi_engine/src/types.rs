//! # Core Types
//!
//! ## Pieces
//!
//! A [`Piece`] is just a colour and a kind. Pieces live in an arena owned by
//! the [`Board`](crate::board::Board) and squares refer to them through a
//! [`PieceId`]. A piece in superposition is referenced from every square it
//! may occupy; moving a piece transfers the index, never the value.
//!
//! ## Locations
//!
//! A [`Location`] is a `(col, row)` pair with `col` in `0..9` (`a`..`i`) and
//! `row` in `0..10`. It parses from and displays as the two-character
//! notation token used throughout the move grammar.
//!
//! ## Move taxonomy
//!
//! [`MoveType`] and [`MoveVariant`] are the output of the classifier and
//! the input of the quantum-execution collaborator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::XiangqiError;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row step that moves a piece of this colour toward the opponent
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Rows on this colour's side of the river
    pub fn home_rows(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Color::Red => RED_HALF_ROWS,
            Color::Black => BLACK_HALF_ROWS,
        }
    }

    /// Rows of this colour's palace
    pub fn palace_rows(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Color::Red => RED_PALACE_ROWS,
            Color::Black => BLACK_PALACE_ROWS,
        }
    }

    pub fn in_palace(self, loc: Location) -> bool {
        PALACE_COLS.contains(&loc.col) && self.palace_rows().contains(&loc.row)
    }

    pub fn on_home_side(self, row: u8) -> bool {
        self.home_rows().contains(&row)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" | "w" => Ok(Color::Red),
            "black" | "b" => Ok(Color::Black),
            other => Err(format!("unknown color '{other}'")),
        }
    }
}

/// Kind of Xiangqi piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Rook,
    Horse,
    Elephant,
    Advisor,
    King,
    Cannon,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Horse,
        PieceType::Elephant,
        PieceType::Advisor,
        PieceType::King,
        PieceType::Cannon,
        PieceType::Pawn,
    ];

    /// Position in [`PieceType::ALL`], used to index per-kind tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a FEN letter, case-insensitive. Accepts both `h`/`e` and the
    /// WXF-style `n`/`b` for horse and elephant.
    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'r' => Some(PieceType::Rook),
            'h' | 'n' => Some(PieceType::Horse),
            'e' | 'b' => Some(PieceType::Elephant),
            'a' => Some(PieceType::Advisor),
            'k' => Some(PieceType::King),
            'c' => Some(PieceType::Cannon),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Rook => "ROOK",
            PieceType::Horse => "HORSE",
            PieceType::Elephant => "ELEPHANT",
            PieceType::Advisor => "ADVISOR",
            PieceType::King => "KING",
            PieceType::Cannon => "CANNON",
            PieceType::Pawn => "PAWN",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareState {
    Occupied,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }
}

/// Index of a piece in the board's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Board coordinate, `a0`..`i9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub col: u8,
    pub row: u8,
}

impl Location {
    /// Build a location from zero-based column and row, if on the board
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < BOARD_COLS && (row as usize) < BOARD_ROWS {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Offset by a signed delta, staying on the board
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Self> {
        let col = self.col as i8 + dcol;
        let row = self.row as i8 + drow;
        if col < 0 || row < 0 {
            return None;
        }
        Location::new(col as u8, row as u8)
    }

    /// `(dcol, drow)` from `self` to `other`
    pub fn delta(self, other: Location) -> (i8, i8) {
        (
            other.col as i8 - self.col as i8,
            other.row as i8 - self.row as i8,
        )
    }

    pub fn file_char(self) -> char {
        (FIRST_COL + self.col) as char
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.row)
    }
}

impl FromStr for Location {
    type Err = XiangqiError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || XiangqiError::InvalidLocation {
            token: token.to_string(),
        };
        let bytes = token.as_bytes();
        if bytes.len() != LOCATION_TOKEN_LEN {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(FIRST_COL..=LAST_COL).contains(&file) || !rank.is_ascii_digit() {
            return Err(invalid());
        }
        Location::new(file - FIRST_COL, rank - b'0').ok_or_else(invalid)
    }
}

impl Serialize for Location {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Quantum move taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveType {
    /// No superposition involved; plays exactly like standard Xiangqi
    Classical,
    Jump,
    Slide,
    SplitJump,
    SplitSlide,
    MergeJump,
    MergeSlide,
    CannonFire,
}

impl MoveType {
    pub fn is_classical(self) -> bool {
        self == MoveType::Classical
    }

    pub fn is_split(self) -> bool {
        matches!(self, MoveType::SplitJump | MoveType::SplitSlide)
    }

    pub fn is_merge(self) -> bool {
        matches!(self, MoveType::MergeJump | MoveType::MergeSlide)
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveType::Classical => "CLASSICAL",
            MoveType::Jump => "JUMP",
            MoveType::Slide => "SLIDE",
            MoveType::SplitJump => "SPLIT_JUMP",
            MoveType::SplitSlide => "SPLIT_SLIDE",
            MoveType::MergeJump => "MERGE_JUMP",
            MoveType::MergeSlide => "MERGE_SLIDE",
            MoveType::CannonFire => "CANNON_FIRE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveVariant {
    Unspecified,
    /// Destination empty
    Basic,
    /// Destination holds (possibly) one of the mover's own pieces
    Excluded,
    /// Destination holds an opponent piece
    Capture,
}

impl fmt::Display for MoveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveVariant::Unspecified => "UNSPECIFIED",
            MoveVariant::Basic => "BASIC",
            MoveVariant::Excluded => "EXCLUDED",
            MoveVariant::Capture => "CAPTURE",
        };
        f.write_str(name)
    }
}
