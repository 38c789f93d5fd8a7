pub mod board;
pub mod engine;
pub mod error;
pub mod ko;
pub mod state;
pub mod stone;

/// Board coordinate `(x, y)`, where `x` selects the row and `y` the column.
pub type Point = (u8, u8);

/// Side length of the goban.
pub const BOARD_SIZE: u8 = 9;

pub use board::{Board, Group};
pub use error::{GoError, IllegalMove};
pub use state::{GameState, Winner};
pub use stone::Stone;
