//! Knights and knaves puzzles.
//!
//! Knights always tell the truth and knaves always lie. A statement `S` made
//! by `A` is encoded as `AKnight => S` together with `AKnave => ¬S`.

use crate::logic::{Sentence, Symbol, model_check};

/// The knight and knave symbols for one character.
#[derive(Debug, Clone)]
pub struct Character {
    pub knight: Symbol,
    pub knave: Symbol,
}

impl Character {
    pub fn new(name: &str) -> Self {
        Self {
            knight: Symbol::new(format!("{name} is a Knight")),
            knave: Symbol::new(format!("{name} is a Knave")),
        }
    }

    /// The character is exactly one of knight or knave.
    pub fn exclusive_role(&self) -> [Sentence; 2] {
        [
            Sentence::or([&self.knight, &self.knave]),
            Sentence::not(Sentence::and([&self.knight, &self.knave])),
        ]
    }

    /// Encode that this character asserts `statement`.
    pub fn says(&self, statement: Sentence) -> [Sentence; 2] {
        [
            Sentence::implies(&self.knight, statement.clone()),
            Sentence::implies(&self.knave, Sentence::not(statement)),
        ]
    }
}

/// A named puzzle and its knowledge base
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub knowledge: Sentence,
}

/// What the checker concluded about one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The knowledge base has no conjuncts yet
    NotImplemented,
    /// Candidate symbols entailed by the knowledge base, in candidate order
    Entailed(Vec<Symbol>),
}

/// The three characters that appear in the puzzles
pub fn characters() -> [Character; 3] {
    [Character::new("A"), Character::new("B"), Character::new("C")]
}

/// Every symbol the checker asks about, in print order.
pub fn candidate_symbols() -> Vec<Symbol> {
    characters()
        .into_iter()
        .flat_map(|c| [c.knight, c.knave])
        .collect()
}

/// The four puzzles.
pub fn puzzles() -> Vec<Puzzle> {
    let [a, b, c] = characters();
    let sym = |s: &Symbol| Sentence::from(s);

    // A says "I am both a knight and a knave."
    let knowledge0 = Sentence::and(
        a.exclusive_role()
            .into_iter()
            .chain(a.says(Sentence::and([&a.knight, &a.knave]))),
    );

    // A says "We are both knaves." B says nothing.
    let knowledge1 = Sentence::and(
        a.exclusive_role()
            .into_iter()
            .chain(b.exclusive_role())
            .chain(a.says(Sentence::and([&a.knave, &b.knave]))),
    );

    // A says "We are the same kind." B says "We are of different kinds."
    let same_kind = Sentence::or([
        Sentence::and([&a.knight, &b.knight]),
        Sentence::and([&a.knave, &b.knave]),
    ]);
    let different_kinds = Sentence::or([
        Sentence::and([&a.knight, &b.knave]),
        Sentence::and([&a.knave, &b.knight]),
    ]);
    let knowledge2 = Sentence::and(
        a.exclusive_role()
            .into_iter()
            .chain(b.exclusive_role())
            .chain(a.says(same_kind))
            .chain(b.says(different_kinds)),
    );

    // A says either "I am a knight." or "I am a knave.", but you don't know which.
    // B says "A said 'I am a knave'."
    // B says "C is a knave."
    // C says "A is a knight."
    let said_knight = Sentence::and(a.says(sym(&a.knight)));
    let said_knave = Sentence::and(a.says(sym(&a.knave)));
    let knowledge3 = Sentence::and(
        a.exclusive_role()
            .into_iter()
            .chain(b.exclusive_role())
            .chain(c.exclusive_role())
            .chain([
                Sentence::or([said_knight.clone(), said_knave.clone()]),
                Sentence::not(Sentence::and([said_knight, said_knave.clone()])),
            ])
            .chain(b.says(said_knave))
            .chain(b.says(sym(&c.knave)))
            .chain(c.says(sym(&a.knight))),
    );

    vec![
        Puzzle {
            name: "Puzzle 0".to_string(),
            knowledge: knowledge0,
        },
        Puzzle {
            name: "Puzzle 1".to_string(),
            knowledge: knowledge1,
        },
        Puzzle {
            name: "Puzzle 2".to_string(),
            knowledge: knowledge2,
        },
        Puzzle {
            name: "Puzzle 3".to_string(),
            knowledge: knowledge3,
        },
    ]
}

/// Check each candidate symbol against the puzzle's knowledge.
pub fn solve(puzzle: &Puzzle, candidates: &[Symbol]) -> Result<Solution, crate::Error> {
    if puzzle.knowledge.conjuncts().is_empty() {
        return Ok(Solution::NotImplemented);
    }

    let mut entailed = Vec::new();
    for symbol in candidates {
        if model_check(&puzzle.knowledge, &Sentence::from(symbol))? {
            entailed.push(symbol.clone());
        }
    }
    log::debug!("{}: {} symbols entailed", puzzle.name, entailed.len());
    Ok(Solution::Entailed(entailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_symbols() {
        let a = Character::new("A");
        assert_eq!(a.knight.name(), "A is a Knight");
        assert_eq!(a.knave.name(), "A is a Knave");
    }

    #[test]
    fn test_candidate_order() {
        let names: Vec<String> = candidate_symbols()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("A is a Knight"));
        assert_eq!(names.last().map(String::as_str), Some("C is a Knave"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_empty_knowledge_is_not_implemented() {
        let puzzle = Puzzle {
            name: "Puzzle X".to_string(),
            knowledge: Sentence::And(vec![]),
        };
        assert_eq!(
            solve(&puzzle, &candidate_symbols()).unwrap(),
            Solution::NotImplemented
        );
    }
}
