//! Classic AI exercises
//!
//! This crate provides:
//! - Tic-Tac-Toe with an exhaustive minimax solver
//! - Propositional logic with truth-table model checking
//! - Knights and knaves puzzles solved by entailment
//! - PageRank by random-walk sampling and by iteration
//! - TF-IDF document and sentence retrieval for question answering

pub mod cli;
pub mod error;
pub mod knights;
pub mod logic;
pub mod pagerank;
pub mod questions;
pub mod tictactoe;

pub use error::{Error, Result};
