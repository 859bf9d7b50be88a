//! Board state validation logic

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check whether the board can arise from legal play with X opening.
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();

        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Several winning lines are only possible when one move completed them all
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(&self.cells, player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::{Board, Cell};

    #[test]
    fn test_valid_positions() {
        assert!(Board::new().is_valid());
        assert!(Board::from_string("X.. .O. ..X").unwrap().is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // XXX
        // XOO
        // XOO
        let board = Board::from_string("XXX XOO XOO").unwrap();
        assert!(board.is_valid());
    }

    #[test]
    fn test_invalid_double_win_without_shared_cell() {
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 6, 7, 8] {
            cells[idx] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        cells[5] = Cell::O;

        let board = Board { cells };
        assert!(!board.is_valid());
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // O wins on the bottom row but X has an extra mark
        let board = Board::from_string("XX. X.X OOO").unwrap();
        assert!(!board.is_valid());
    }
}
