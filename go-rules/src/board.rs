use std::collections::{HashSet, VecDeque};
use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::stone::Stone;
use crate::{BOARD_SIZE, Point};

const N: usize = BOARD_SIZE as usize;

/// Orthogonal neighbor offsets, in scan order.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A connected group of same-colored stones and its distinct liberties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: usize,
}

/// The 9×9 goban, indexed as `cells[x][y]`.
///
/// Serializes as nine rows of nine `null | "black" | "white"` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Stone>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// Build a board from an ASCII layout. 'B' = Black, 'W' = White, '+' or '.' = Empty.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        if layout.len() != N {
            return Err(GoError::MalformedLayout(format!(
                "expected {N} rows, got {}",
                layout.len()
            )));
        }

        let mut board = Board::new();
        for (x, row) in layout.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != N {
                return Err(GoError::MalformedLayout(format!(
                    "row {x} has {} cells, expected {N}",
                    chars.len()
                )));
            }
            for (y, c) in chars.into_iter().enumerate() {
                board.cells[x][y] = match c {
                    '+' | '.' => None,
                    other => Some(Stone::from_letter(other).ok_or_else(|| {
                        GoError::MalformedLayout(format!("unexpected cell {other:?} at ({x}, {y})"))
                    })?),
                };
            }
        }
        Ok(board)
    }

    // -- Accessors --

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        let (x, y) = point;
        if self.on_board(point) {
            self.cells[x as usize][y as usize]
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.stone_count() == 0
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Row-major flat view: 1 black, -1 white, 0 empty.
    pub fn to_ints(&self) -> Vec<i8> {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.map_or(0, Stone::to_int))
            .collect()
    }

    /// Every coordinate on the board, in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| (x, y)))
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        for (dx, dy) in DIRECTIONS {
            let nx = x as i16 + dx as i16;
            let ny = y as i16 + dy as i16;
            if (0..N as i16).contains(&nx) && (0..N as i16).contains(&ny) {
                result.push((nx as u8, ny as u8));
            }
        }
        result
    }

    /// Breadth-first flood fill of the group at `point`, counting distinct empty neighbors.
    /// An empty or off-board point yields an empty group with no liberties.
    pub fn group_and_liberties(&self, point: Point) -> Group {
        let Some(stone) = self.stone_at(point) else {
            return Group::default();
        };

        let mut visited: HashSet<Point> = HashSet::new();
        let mut liberties: HashSet<Point> = HashSet::new();
        let mut stones = Vec::new();
        let mut queue = VecDeque::from([point]);

        while let Some(p) = queue.pop_front() {
            if !visited.insert(p) {
                continue;
            }
            stones.push(p);
            for n in self.neighbors(p) {
                match self.stone_at(n) {
                    None => {
                        liberties.insert(n);
                    }
                    Some(s) if s == stone && !visited.contains(&n) => queue.push_back(n),
                    Some(_) => {}
                }
            }
        }

        Group {
            stones,
            liberties: liberties.len(),
        }
    }

    /// Place `stone` at `point` on a copy of the board and remove every adjacent
    /// opponent group left without liberties. Groups are evaluated against the
    /// post-placement board before any removal, so captures are simultaneous.
    ///
    /// Returns the resulting board and the captured points. The caller is
    /// responsible for `point` being on the board and empty.
    pub(crate) fn place_and_capture(&self, point: Point, stone: Stone) -> (Board, Vec<Point>) {
        let mut board = *self;
        board.set_stone(point, stone);

        let opponent = stone.opp();
        let mut dead: Vec<Point> = Vec::new();
        for n in board.neighbors(point) {
            if board.stone_at(n) != Some(opponent) || dead.contains(&n) {
                continue;
            }
            let group = board.group_and_liberties(n);
            if group.liberties == 0 {
                dead.extend(group.stones);
            }
        }

        for &p in &dead {
            board.clear_stone(p);
        }
        if !dead.is_empty() {
            tracing::trace!(%stone, ?point, captured = dead.len(), "resolved captures");
        }

        (board, dead)
    }

    // -- Internal helpers --

    pub(crate) fn set_stone(&mut self, (x, y): Point, stone: Stone) {
        if self.on_board((x, y)) {
            self.cells[x as usize][y as usize] = Some(stone);
        }
    }

    fn clear_stone(&mut self, (x, y): Point) {
        if self.on_board((x, y)) {
            self.cells[x as usize][y as usize] = None;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.map_or('+', Stone::letter)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
