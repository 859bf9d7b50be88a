//! The eight three-in-a-row lines

use super::{Cell, Player};

/// Row-major cell indices of the rows, then the columns, then the diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    fn owned_by(cells: &[Cell; 9], line: &[usize; 3], player: Player) -> bool {
        let mark = player.to_cell();
        line.iter().all(|&idx| cells[idx] == mark)
    }

    /// Whether `player` holds at least one full line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::owned_by(cells, line, player))
    }

    /// Every line `player` holds, in [`WINNING_LINES`] order.
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        WINNING_LINES
            .iter()
            .filter(|line| Self::owned_by(cells, line, player))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn cells(board: &str) -> [Cell; 9] {
        Board::from_string(board).unwrap().cells
    }

    #[test]
    fn test_each_line_kind_wins() {
        for (board, winner) in [
            ("OO. ... XXX", Player::X),
            ("OX. OX. O.X", Player::O),
            ("..X .XO XO.", Player::X),
        ] {
            let cells = cells(board);
            assert!(LineAnalyzer::has_won(&cells, winner), "{board}");
            assert!(!LineAnalyzer::has_won(&cells, winner.opponent()), "{board}");
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let cells = cells("XX. OO. ...");
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(LineAnalyzer::completed_lines(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_completed_lines_in_table_order() {
        let cells = cells("XXX XOO XOO");
        assert_eq!(
            LineAnalyzer::completed_lines(&cells, Player::X),
            vec![[0, 1, 2], [0, 3, 6]]
        );
        assert!(LineAnalyzer::completed_lines(&cells, Player::O).is_empty());
    }
}
