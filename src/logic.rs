//! Propositional logic and model checking

pub mod model_check;
pub mod sentence;

pub use model_check::{model_check, satisfiable};
pub use sentence::{Model, Sentence, Symbol};
