use std::fmt;

/// Reason a placement fails the legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    NotOnBoard,
    Overwrite,
    KoViolation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    IllegalMove(IllegalMove),
    Suicide,
    OutOfTurn,
    GameOver,
    MalformedLayout(String),
}

impl GoError {
    /// True for every rejection raised by the legality check.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GoError::IllegalMove(_))
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NotOnBoard => write!(f, "not on board"),
            IllegalMove::Overwrite => write!(f, "overwrite"),
            IllegalMove::KoViolation => write!(f, "ko violation"),
        }
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
            GoError::Suicide => write!(f, "suicide move"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::GameOver => write!(f, "game over"),
            GoError::MalformedLayout(msg) => write!(f, "malformed layout: {msg}"),
        }
    }
}

impl From<IllegalMove> for GoError {
    fn from(reason: IllegalMove) -> Self {
        GoError::IllegalMove(reason)
    }
}

impl std::error::Error for GoError {}
