//! # Board Geometry Constants
//!
//! ## Overview
//!
//! The Xiangqi board is 9 columns wide (files `a`..`i`) and 10 rows tall
//! (ranks `0`..`9`). Pieces stand on intersections, but the engine treats
//! every intersection as a square addressed by a two-character token such
//! as `e9`.
//!
//! ## Orientation
//!
//! RED sets up on rows 5-9 with its back rank on row 9, BLACK on rows 0-4
//! with its back rank on row 0. The river runs between rows 4 and 5, so
//! each colour's "own half" is exactly the rows it starts on:
//!
//! ```text
//!   9  R H E A K A E H R   <- RED back rank
//!   8  . . . . . . . . .
//!   7  . C . . . . . C .
//!   6  P . P . P . P . P
//!   5  . . . . . . . . .
//!      ~~~~~ river ~~~~~
//!   4  . . . . . . . . .
//!   3  p . p . p . p . p
//!   2  . c . . . . . c .
//!   1  . . . . . . . . .
//!   0  r h e a k a e h r   <- BLACK back rank
//!      a b c d e f g h i
//! ```
//!
//! ## Palaces
//!
//! Each side's king and advisors are confined to a 3x3 palace spanning
//! columns `d`..`f` on that side's three back rows (7-9 for RED, 0-2 for
//! BLACK).

use std::ops::RangeInclusive;

/// Number of columns (`a`..`i`)
pub const BOARD_COLS: usize = 9;

/// Number of rows (`0`..`9`)
pub const BOARD_ROWS: usize = 10;

/// Total number of squares on the board
pub const BOARD_SQUARES: usize = BOARD_COLS * BOARD_ROWS;

/// First column letter
pub const FIRST_COL: u8 = b'a';

/// Last column letter
pub const LAST_COL: u8 = b'i';

/// Columns covered by both palaces (`d`..`f`)
pub const PALACE_COLS: RangeInclusive<u8> = 3..=5;

/// Rows of the RED palace
pub const RED_PALACE_ROWS: RangeInclusive<u8> = 7..=9;

/// Rows of the BLACK palace
pub const BLACK_PALACE_ROWS: RangeInclusive<u8> = 0..=2;

/// Rows on RED's side of the river
pub const RED_HALF_ROWS: RangeInclusive<u8> = 5..=9;

/// Rows on BLACK's side of the river
pub const BLACK_HALF_ROWS: RangeInclusive<u8> = 0..=4;

/// Separator marking the two-square side of a split or merge
pub const QUANTUM_SEPARATOR: char = '^';

/// Length of a single square token (`a0`)
pub const LOCATION_TOKEN_LEN: usize = 2;

/// Length of a simple move string (`a0a1`)
pub const SIMPLE_MOVE_LEN: usize = 2 * LOCATION_TOKEN_LEN;

/// Length of a split or merge move string (`a0a1^b2`, `a0^a1b2`)
pub const QUANTUM_MOVE_LEN: usize = 3 * LOCATION_TOKEN_LEN + 1;

/// Opening position, RED to move
pub const INITIAL_FEN: &str = "RHEAKAEHR/9/1C5C1/P1P1P1P1P/9/9/p1p1p1p1p/1c5c1/9/rheakaehr w---1";
