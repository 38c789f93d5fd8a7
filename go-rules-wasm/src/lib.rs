use go_rules::{BOARD_SIZE, GameState, GoError, IllegalMove, Point, Stone};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_json(message: impl ToString) -> String {
    serde_json::to_string(&ErrorBody {
        error: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"unknown"}"#.to_string())
}

/// Convert JS coordinates, rejecting anything off the board before it is
/// narrowed to the engine's point type.
fn to_point(x: i32, y: i32) -> Result<Point, GoError> {
    let on_board = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
    if on_board(x) && on_board(y) {
        Ok((x as u8, y as u8))
    } else {
        Err(IllegalMove::NotOnBoard.into())
    }
}

/// Apply a move to a stored state without holding a game object.
/// Returns the next state as JSON, or `{ "error": "message" }` when the state
/// does not parse, the color is unknown, or the move is rejected.
#[wasm_bindgen]
pub fn apply_move_json(state_json: &str, color: &str, x: i32, y: i32) -> String {
    let state = match GameState::from_json(state_json) {
        Ok(s) => s,
        Err(e) => return error_json(e),
    };
    let stone: Stone = match color.parse() {
        Ok(s) => s,
        Err(e) => return error_json(e),
    };
    match to_point(x, y).and_then(|point| state.apply_move(stone, point)) {
        Ok(next) => next.to_json().unwrap_or_else(error_json),
        Err(e) => error_json(e),
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    last_error: Option<String>,
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            last_error: None,
        }
    }

    // -- Game actions --

    /// Play for the side to move. On rejection the held state is kept and
    /// the reason is available from `last_error`.
    pub fn try_play(&mut self, x: i32, y: i32) -> bool {
        let player = self.state.current_player;
        match to_point(x, y).and_then(|point| self.state.play(player, point)) {
            Ok(next) => {
                self.state = next;
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn last_error(&self) -> String {
        self.last_error.clone().unwrap_or_default()
    }

    // -- JSON serialization (WASM boundary) --

    pub fn state_json(&self) -> String {
        self.state.to_json().unwrap_or_else(error_json)
    }

    pub fn load_json(&mut self, json: &str) -> bool {
        match GameState::from_json(json) {
            Ok(state) => {
                self.state = state;
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// JSON array of `[x, y]` points open to the side to move.
    pub fn legal_moves_json(&self) -> String {
        let points: Vec<Point> = self.state.legal_moves(self.state.current_player).collect();
        serde_json::to_string(&points).unwrap_or_else(|_| "[]".into())
    }

    // -- State accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.state.board.to_ints().as_slice())
    }

    pub fn current_player(&self) -> String {
        self.state.current_player.to_string()
    }

    pub fn captured_black(&self) -> u32 {
        self.state.captured_black
    }

    pub fn captured_white(&self) -> u32 {
        self.state.captured_white
    }

    pub fn is_legal(&self, x: i32, y: i32) -> bool {
        let player = self.state.current_player;
        to_point(x, y).is_ok_and(|point| self.state.is_valid_move(player, point))
    }

    pub fn has_ko(&self) -> bool {
        self.state.has_ko()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    /// "black", "white", "draw", or empty while the game is running.
    pub fn winner(&self) -> String {
        self.state.winner.map(|w| w.to_string()).unwrap_or_default()
    }

    pub fn has_last_move(&self) -> bool {
        self.state.last_move.is_some()
    }

    pub fn last_move_x(&self) -> i8 {
        self.state.last_move.map(|(x, _)| x as i8).unwrap_or(-1)
    }

    pub fn last_move_y(&self) -> i8 {
        self.state.last_move.map(|(_, y)| y as i8).unwrap_or(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_alternating_moves() {
        let mut game = WasmGame::new();
        assert_eq!(game.current_player(), "black");
        assert!(game.try_play(4, 4));
        assert_eq!(game.current_player(), "white");
        assert!(game.has_last_move());
        assert_eq!((game.last_move_x(), game.last_move_y()), (4, 4));
    }

    #[test]
    fn rejected_move_keeps_state() {
        let mut game = WasmGame::new();
        assert!(game.try_play(4, 4));
        let before = game.state_json();

        assert!(!game.try_play(4, 4));
        assert_eq!(game.last_error(), "illegal move: overwrite");
        assert_eq!(game.state_json(), before);

        assert!(game.try_play(0, 0));
        assert_eq!(game.last_error(), "");
    }

    #[test]
    fn out_of_range_coordinates_are_off_board() {
        let mut game = WasmGame::new();
        assert!(!game.try_play(260, 0));
        assert_eq!(game.last_error(), "illegal move: not on board");
        assert!(!game.try_play(4, -252));
        assert!(game.state_json().contains(r#""current_player":"black""#));
        assert_eq!(game.last_move_x(), -1);

        let fresh = GameState::new().to_json().unwrap();
        let rejected: serde_json::Value =
            serde_json::from_str(&apply_move_json(&fresh, "black", 260, 4)).unwrap();
        assert_eq!(rejected["error"], "illegal move: not on board");
    }

    #[test]
    fn legality_checks() {
        let game = WasmGame::new();
        assert!(game.is_legal(0, 0));
        assert!(!game.is_legal(9, 0));
        assert!(!game.is_legal(-1, 0));
        let points: Vec<[u8; 2]> = serde_json::from_str(&game.legal_moves_json()).unwrap();
        assert_eq!(points.len(), 81);
        assert_eq!(points[0], [0, 0]);
    }

    #[test]
    fn loads_stored_state() {
        let mut source = WasmGame::new();
        assert!(source.try_play(2, 3));

        let mut game = WasmGame::new();
        assert!(game.load_json(&source.state_json()));
        assert_eq!(game.current_player(), "white");
        assert!(!game.is_legal(2, 3));

        assert!(!game.load_json("{not json"));
        assert!(!game.last_error().is_empty());
    }

    #[test]
    fn reports_game_state() {
        let game = WasmGame::new();
        assert_eq!(game.captured_black(), 0);
        assert_eq!(game.captured_white(), 0);
        assert!(!game.has_ko());
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), "");
        assert_eq!(game.last_move_x(), -1);
    }

    #[test]
    fn stateless_apply() {
        let fresh = GameState::new().to_json().unwrap();
        let next = apply_move_json(&fresh, "black", 4, 4);
        let state = GameState::from_json(&next).unwrap();
        assert_eq!(state.stone_at((4, 4)), Some(Stone::Black));

        let rejected: serde_json::Value =
            serde_json::from_str(&apply_move_json(&next, "white", 4, 4)).unwrap();
        assert_eq!(rejected["error"], "illegal move: overwrite");

        let bad_color: serde_json::Value =
            serde_json::from_str(&apply_move_json(&fresh, "red", 0, 0)).unwrap();
        assert_eq!(bad_color["error"], "invalid stone: red");
    }
}
