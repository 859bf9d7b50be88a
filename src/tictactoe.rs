//! Tic-Tac-Toe game implementation and minimax solver

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod validation;

pub use board::{Board, Cell, Move, Player};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{OPENING_MOVE, minimax, minimax_value};
