//! Subcommand implementations

pub mod knights;
pub mod pagerank;
pub mod questions;
pub mod tictactoe;
