//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Move, Player},
    minimax::minimax,
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of `board`, or `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if !board.terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }
}

/// A game with its full move history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    current: Board,
}

impl Game {
    /// Start a game from the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Self {
            initial,
            moves: Vec::new(),
            current: initial,
        }
    }

    /// Board after every recorded move
    pub fn current(&self) -> Board {
        self.current
    }

    /// Play a move for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the game is over or the cell is
    /// taken; the game is left unchanged.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        self.current = self.current.result(mv)?;
        self.moves.push(mv);
        Ok(())
    }

    /// `None` while the game is still running
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.current)
    }

    /// Replay the history and return every board from the initial one onward.
    pub fn boards(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        boards.push(board);
        for &mv in &self.moves {
            board = board.result(mv)?;
            boards.push(board);
        }
        Ok(boards)
    }

    /// Play minimax against itself from the current position until the game ends.
    pub fn play_out(&mut self) -> Result<GameOutcome, crate::Error> {
        while let Some(mv) = minimax(&self.current) {
            self.play(mv)?;
        }
        // minimax only returns None on a terminal board
        Ok(GameOutcome::of(&self.current).unwrap_or(GameOutcome::Draw))
    }

    /// A complete minimax-versus-minimax game from the empty board.
    pub fn self_play() -> Result<Self, crate::Error> {
        let mut game = Self::new();
        let outcome = game.play_out()?;
        log::info!("self-play finished after {} moves: {outcome:?}", game.moves.len());
        Ok(game)
    }
}
