//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate on the board.
///
/// Moves order lexicographically, row first. Minimax relies on this order to
/// break ties between equally good moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into the cell array, or `None` when out of bounds.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board in row-major order.
///
/// The player to move is not stored: it is derived from the mark counts, so
/// any board built through [`Board::result`] keeps turn alternation intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// The starting position of every game.
    pub fn initial_state() -> Self {
        Self::new()
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (`X`, `O`, `.` or `_`);
    /// whitespace is filtered out so a board can be written one row per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise with X moving first
    ///
    /// # Examples
    ///
    /// ```
    /// use intro_ai::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("X.. .O. ...").unwrap();
    /// assert_eq!(board.player(), Player::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let cells = Self::parse_cells(&chars, s)?;
        let board = Board { cells };
        let count = board.count_pieces();

        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get the cell at a coordinate
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|i| self.cells[i])
    }

    /// The player whose turn it is: X when the counts are equal, else O.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// All empty coordinates. Empty only when the board is full.
    pub fn actions(&self) -> BTreeSet<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the current player's mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] when the board is terminal, the
    /// coordinate is off the board, or the cell is occupied.
    #[must_use = "result returns a new board; the input board is unchanged"]
    pub fn result(&self, mv: Move) -> Result<Board, crate::Error> {
        let invalid = |reason: &str| crate::Error::InvalidMove {
            row: mv.row,
            col: mv.col,
            reason: reason.to_string(),
        };

        if self.terminal() {
            return Err(invalid("game already over"));
        }
        let index = mv.index().ok_or_else(|| invalid("out of bounds"))?;
        if self.cells[index] != Cell::Empty {
            return Err(invalid("cell is already occupied"));
        }

        let mut next = *self;
        next.cells[index] = self.player().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// +1 if X has won, -1 if O has won, 0 on a draw; `None` while the game
    /// is still running.
    pub fn utility(&self) -> Option<i32> {
        if !self.terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.player(), Player::X);
        assert_eq!(board.actions().len(), 9);
        assert!(!board.terminal());
        assert_eq!(board.utility(), None);
    }

    #[test]
    fn test_result() {
        let board = Board::new();

        let next = board.result(Move::new(1, 1)).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(next.player(), Player::O);
        // Input is untouched
        assert_eq!(board.cells[4], Cell::Empty);

        let err = next.result(Move::new(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 1, col: 1, .. }));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_result_out_of_bounds() {
        let err = Board::new().result(Move::new(3, 0)).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_result_on_terminal_board() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert!(board.terminal());
        let err = board.result(Move::new(2, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { .. }));
    }

    #[test]
    fn test_actions_are_ordered() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let actions: Vec<Move> = board.actions().into_iter().collect();
        assert_eq!(actions.first(), Some(&Move::new(0, 1)));
        assert_eq!(actions.last(), Some(&Move::new(2, 2)));
        assert_eq!(actions.len(), 7);
    }

    #[test]
    fn test_win_detection() {
        let row = Board::from_string("OO. XXX ...").unwrap();
        assert_eq!(row.winner(), Some(Player::X));
        assert_eq!(row.utility(), Some(1));

        let column = Board::from_string("OX. OX. O.X").unwrap();
        assert_eq!(column.winner(), Some(Player::O));
        assert_eq!(column.utility(), Some(-1));

        let diagonal = Board::from_string("X.O .XO ..X").unwrap();
        assert_eq!(diagonal.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert!(board.terminal());
        assert!(board.is_draw());
        assert_eq!(board.utility(), Some(0));
        assert!(board.actions().is_empty());
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            Board::from_string("OO......."),
            Err(crate::Error::InvalidPieceCounts { x_count: 0, o_count: 2 })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X.. .O. ..X").unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        let mut expected = Player::X;
        for index in [0, 4, 8, 2] {
            assert_eq!(board.player(), expected);
            board = board.result(Move::from_index(index)).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(board.occupied_count(), 4);
    }
}
