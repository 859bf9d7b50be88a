//! Exhaustive minimax search over the full game tree.
//!
//! X maximizes utility and O minimizes it. Actions are visited in ascending
//! `(row, col)` order and only a strictly better value replaces the current
//! best, so the first optimal move in that order is returned.

use super::board::{Board, Move, Player};

/// Opening move returned directly for the empty board.
pub const OPENING_MOVE: Move = Move { row: 1, col: 1 };

/// Best utility X can force from `board`, assuming O replies optimally.
fn max_value(board: &Board) -> i32 {
    if let Some(utility) = board.utility() {
        return utility;
    }

    let mut value = i32::MIN;
    for mv in board.actions() {
        if let Ok(next) = board.result(mv) {
            value = value.max(min_value(&next));
        }
    }
    value
}

/// Best utility O can force from `board`, assuming X replies optimally.
fn min_value(board: &Board) -> i32 {
    if let Some(utility) = board.utility() {
        return utility;
    }

    let mut value = i32::MAX;
    for mv in board.actions() {
        if let Ok(next) = board.result(mv) {
            value = value.min(max_value(&next));
        }
    }
    value
}

/// Game-theoretic value of a board under optimal play by both sides.
pub fn minimax_value(board: &Board) -> i32 {
    match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Optimal move for the player to move, or `None` on a terminal board.
///
/// # Examples
///
/// ```
/// use intro_ai::tictactoe::{Board, Move, minimax};
///
/// // X completes the top row
/// let board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(minimax(&board), Some(Move::new(0, 2)));
/// ```
pub fn minimax(board: &Board) -> Option<Move> {
    if board.terminal() {
        return None;
    }
    if *board == Board::initial_state() {
        return Some(OPENING_MOVE);
    }

    let player = board.player();
    let mut best: Option<(Move, i32)> = None;

    for mv in board.actions() {
        let Ok(next) = board.result(mv) else {
            continue;
        };
        let value = match player {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };

        let improves = match (player, best) {
            (_, None) => true,
            (Player::X, Some((_, best_value))) => value > best_value,
            (Player::O, Some((_, best_value))) => value < best_value,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    if let Some((mv, value)) = best {
        log::debug!("minimax picked {mv} for {player} with value {value}");
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_opening() {
        assert_eq!(minimax(&Board::new()), Some(OPENING_MOVE));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(minimax(&board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move can win on the middle row
        let board = Board::from_string("XX. OO. X..").unwrap();
        assert_eq!(minimax(&board), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_blocks_opponent() {
        // X threatens the top row; O must block at (0, 2)
        let board = Board::from_string("XX. .O. ...").unwrap();
        assert_eq!(minimax(&board), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_tie_break_prefers_first_move() {
        // Several replies draw; X must pick the lowest coordinate among them
        let board = Board::from_string("... .O. ..X").unwrap();
        let values: Vec<i32> = board
            .actions()
            .into_iter()
            .map(|mv| minimax_value(&board.result(mv).unwrap()))
            .collect();
        let best = minimax(&board).unwrap();
        let first_best = board
            .actions()
            .into_iter()
            .zip(values.iter())
            .find(|(_, v)| **v == *values.iter().max().unwrap())
            .map(|(mv, _)| mv)
            .unwrap();
        assert_eq!(best, first_best);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_value(&Board::new()), 0);
    }
}
