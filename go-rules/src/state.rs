use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl Winner {
    /// Decide the winner from the capture tallies alone.
    pub fn by_captures(captured_black: u32, captured_white: u32) -> Self {
        match captured_black.cmp(&captured_white) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => write!(f, "black"),
            Winner::White => write!(f, "white"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// A complete game snapshot. Rule operations borrow it and return a new one.
///
/// `captured_black` counts the white stones black has taken, and vice versa.
/// Fields missing from a stored record take their fresh-game values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub board: Board,
    pub current_player: Stone,
    pub captured_black: u32,
    pub captured_white: u32,
    pub last_move: Option<Point>,
    /// Board that a single-stone recapture must not recreate.
    pub ko_protection: Option<Board>,
    pub is_game_over: bool,
    pub winner: Option<Winner>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, black to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Stone::Black,
            captured_black: 0,
            captured_white: 0,
            last_move: None,
            ko_protection: None,
            is_game_over: false,
            winner: None,
        }
    }

    /// Start from an arbitrary position with `to_play` on move.
    pub fn with_board(board: Board, to_play: Stone) -> Self {
        GameState {
            board,
            current_player: to_play,
            ..Self::new()
        }
    }

    // -- Accessors --

    /// Stones captured by `stone`.
    pub fn captures(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.captured_black,
            Stone::White => self.captured_white,
        }
    }

    pub(crate) fn add_captures(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.captured_black += count,
            Stone::White => self.captured_white += count,
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    pub fn has_ko(&self) -> bool {
        self.ko_protection.is_some()
    }

    // -- Serialization --

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
