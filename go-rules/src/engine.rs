use crate::Point;
use crate::board::Board;
use crate::error::{GoError, IllegalMove};
use crate::ko;
use crate::state::{GameState, Winner};
use crate::stone::Stone;

impl GameState {
    // -- Move validation --

    /// Check bounds, occupancy and ko, in that order. Suicide is not checked here.
    pub fn check_move(&self, stone: Stone, point: Point) -> Result<(), IllegalMove> {
        if !self.board.on_board(point) {
            return Err(IllegalMove::NotOnBoard);
        }

        if self.board.stone_at(point).is_some() {
            return Err(IllegalMove::Overwrite);
        }

        if let Some(protected) = &self.ko_protection {
            if ko::recreates(protected, &self.board, point, stone) {
                return Err(IllegalMove::KoViolation);
            }
        }

        Ok(())
    }

    pub fn is_valid_move(&self, stone: Stone, point: Point) -> bool {
        self.check_move(stone, point).is_ok()
    }

    /// Every point where `stone` may be placed, lazily in row-major order.
    pub fn legal_moves(&self, stone: Stone) -> impl Iterator<Item = Point> + '_ {
        Board::points().filter(move |&p| self.is_valid_move(stone, p))
    }

    // -- Game actions --

    /// Place a stone and resolve captures. Returns the next state, or an error
    /// leaving `self` untouched.
    ///
    /// Does not consult `is_game_over`; use [`GameState::play`] for a guarded,
    /// turn-checked move.
    pub fn apply_move(&self, stone: Stone, point: Point) -> Result<GameState, GoError> {
        if let Err(reason) = self.check_move(stone, point) {
            tracing::debug!(%stone, ?point, %reason, "rejected move");
            return Err(reason.into());
        }

        let (board, dead) = self.board.place_and_capture(point, stone);

        if dead.is_empty() && board.group_and_liberties(point).liberties == 0 {
            tracing::debug!(%stone, ?point, "rejected suicide");
            return Err(GoError::Suicide);
        }

        let mut next = self.clone();
        next.board = board;
        next.last_move = Some(point);
        next.add_captures(stone, dead.len() as u32);
        next.ko_protection = ko::protection_after(&self.board, dead.len());
        next.current_player = stone.opp();

        if next.ko_protection.is_some() {
            tracing::debug!(%stone, ?point, "ko protection armed");
        }

        Ok(next)
    }

    /// End the game when the player to move has no legal point left.
    pub fn check_game_end(&self) -> GameState {
        let mut next = self.clone();
        if self.is_game_over {
            return next;
        }

        if self.legal_moves(self.current_player).next().is_none() {
            let winner = Winner::by_captures(self.captured_black, self.captured_white);
            tracing::info!(
                %winner,
                captured_black = self.captured_black,
                captured_white = self.captured_white,
                "game over: {} has no legal move",
                self.current_player
            );
            next.is_game_over = true;
            next.winner = Some(winner);
        }

        next
    }

    /// Submit a move for `stone`: rejects finished games and out-of-turn
    /// players, applies the move, then checks for the end of the game.
    pub fn play(&self, stone: Stone, point: Point) -> Result<GameState, GoError> {
        if self.is_game_over {
            return Err(GoError::GameOver);
        }

        if stone != self.current_player {
            return Err(GoError::OutOfTurn);
        }

        Ok(self.apply_move(stone, point)?.check_game_end())
    }
}
