//! Entailment by truth-table enumeration

use super::sentence::{Model, Sentence, Symbol};

/// Whether `knowledge` entails `query`.
///
/// Enumerates all `2^k` models over the symbols of both sentences. The query
/// is entailed when it holds in every model where the knowledge holds.
///
/// # Examples
///
/// ```
/// use intro_ai::logic::{Sentence, model_check};
///
/// let rain = Sentence::symbol("rain");
/// let wet = Sentence::symbol("wet");
/// let kb = Sentence::and([Sentence::implies(rain.clone(), wet.clone()), rain]);
/// assert!(model_check(&kb, &wet).unwrap());
/// ```
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool, crate::Error> {
    let mut symbols: Vec<Symbol> = knowledge.symbols().union(&query.symbols()).cloned().collect();
    // Enumeration pops from the back; reverse so symbols are assigned in ascending order
    symbols.reverse();
    check_all(knowledge, query, &mut symbols, &mut Model::new())
}

fn check_all(
    knowledge: &Sentence,
    query: &Sentence,
    remaining: &mut Vec<Symbol>,
    model: &mut Model,
) -> Result<bool, crate::Error> {
    let Some(symbol) = remaining.pop() else {
        // Models where the knowledge fails say nothing about the query
        return Ok(!knowledge.evaluate(model)? || query.evaluate(model)?);
    };

    let mut entailed = true;
    for value in [true, false] {
        model.insert(symbol.clone(), value);
        if !check_all(knowledge, query, remaining, model)? {
            entailed = false;
            break;
        }
    }
    model.remove(&symbol);
    remaining.push(symbol);
    Ok(entailed)
}

/// Whether at least one model makes `knowledge` true.
pub fn satisfiable(knowledge: &Sentence) -> Result<bool, crate::Error> {
    let symbols: Vec<Symbol> = knowledge.symbols().into_iter().collect();
    let mut model = Model::new();

    for bits in 0u64..(1u64 << symbols.len()) {
        for (i, symbol) in symbols.iter().enumerate() {
            model.insert(symbol.clone(), bits & (1 << i) != 0);
        }
        if knowledge.evaluate(&model)? {
            return Ok(true);
        }
    }
    Ok(false)
}
