use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// True when playing `stone` at `point` captures exactly one stone and leaves
/// the board identical to the protected snapshot.
pub fn recreates(protected: &Board, board: &Board, point: Point, stone: Stone) -> bool {
    let (after, dead) = board.place_and_capture(point, stone);
    dead.len() == 1 && after == *protected
}

/// Ko protection after a move: a single-stone capture protects the board as it
/// stood before the move; any other move clears it.
pub fn protection_after(before: &Board, captured: usize) -> Option<Board> {
    (captured == 1).then_some(*before)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ko_shape() -> Board {
        Board::from_layout(&[
            "+BW++++++",
            "BW+W+++++",
            "+BW++++++",
            "+++++++++",
            "+++++++++",
            "+++++++++",
            "+++++++++",
            "+++++++++",
            "+++++++++",
        ])
        .unwrap()
    }

    #[test]
    fn single_capture_arms_protection() {
        let before = ko_shape();
        assert_eq!(protection_after(&before, 1), Some(before));
        assert_eq!(protection_after(&before, 0), None);
        assert_eq!(protection_after(&before, 2), None);
    }

    #[test]
    fn detects_immediate_recapture() {
        let before = ko_shape();
        let (after, dead) = before.place_and_capture((1, 2), Stone::Black);
        assert_eq!(dead, vec![(1, 1)]);

        assert!(recreates(&before, &after, (1, 1), Stone::White));
    }

    #[test]
    fn ignores_moves_elsewhere() {
        let before = ko_shape();
        let (after, _) = before.place_and_capture((1, 2), Stone::Black);
        assert!(!recreates(&before, &after, (5, 5), Stone::White));
    }
}
