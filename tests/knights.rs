//! Knights and knaves puzzles solved by model checking

use intro_ai::{
    knights::{Solution, candidate_symbols, puzzles, solve},
    logic::{Sentence, satisfiable},
};

fn entailed_names(index: usize) -> Vec<String> {
    let puzzle = &puzzles()[index];
    match solve(puzzle, &candidate_symbols()).unwrap() {
        Solution::Entailed(symbols) => symbols.iter().map(|s| s.name().to_string()).collect(),
        Solution::NotImplemented => panic!("{} has no knowledge", puzzle.name),
    }
}

#[test]
fn puzzle_0_speaker_is_a_knave() {
    assert_eq!(entailed_names(0), vec!["A is a Knave"]);
}

#[test]
fn puzzle_1_a_knave_b_knight() {
    assert_eq!(entailed_names(1), vec!["A is a Knave", "B is a Knight"]);
}

#[test]
fn puzzle_2_a_knave_b_knight() {
    assert_eq!(entailed_names(2), vec!["A is a Knave", "B is a Knight"]);
}

#[test]
fn puzzle_3_a_knight_b_knave_c_knight() {
    assert_eq!(
        entailed_names(3),
        vec!["A is a Knight", "B is a Knave", "C is a Knight"]
    );
}

#[test]
fn every_puzzle_is_satisfiable() {
    for puzzle in puzzles() {
        assert!(
            satisfiable(&puzzle.knowledge).unwrap(),
            "{} is contradictory",
            puzzle.name
        );
    }
}

#[test]
fn puzzles_are_named_in_order() {
    let names: Vec<String> = puzzles().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Puzzle 0", "Puzzle 1", "Puzzle 2", "Puzzle 3"]);
}

#[test]
fn knowledge_renders_with_connectives() {
    let puzzle = &puzzles()[0];
    let rendered = puzzle.knowledge.to_string();
    assert!(rendered.contains("A is a Knight ∨ A is a Knave"));
    assert!(rendered.contains("=>"));
    assert_eq!(puzzle.knowledge.conjuncts().len(), 4);
}

#[test]
fn unsatisfiable_knowledge_is_distinguishable_from_no_conclusions() {
    let p = Sentence::symbol("A is a Knight");
    let contradiction = Sentence::and([p.clone(), Sentence::not(p)]);
    assert!(!satisfiable(&contradiction).unwrap());
}
