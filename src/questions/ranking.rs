//! File and sentence ranking against a query

use std::collections::{BTreeMap, BTreeSet};

use super::idf::{Idfs, idf_or_zero};

/// A sentence and its tokens
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedSentence {
    pub text: String,
    pub tokens: Vec<String>,
}

/// The `n` files with the highest summed TF-IDF over the query tokens.
///
/// Equal scores keep filename order.
pub fn top_files(
    query: &BTreeSet<String>,
    files: &BTreeMap<String, Vec<String>>,
    idfs: &Idfs,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(&String, f64)> = files
        .iter()
        .map(|(name, tokens)| {
            let score: f64 = query
                .iter()
                .map(|word| {
                    let tf = tokens.iter().filter(|t| *t == word).count() as f64;
                    tf * idf_or_zero(idfs, word)
                })
                .sum();
            (name, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(n)
        .map(|(name, _)| name.clone())
        .collect()
}

/// The `n` sentences that best match the query.
///
/// Sentences rank by the summed IDF of the query words they contain; ties go
/// to the higher query term density, the share of the sentence's tokens that
/// are query words.
pub fn top_sentences(
    query: &BTreeSet<String>,
    sentences: &[TokenizedSentence],
    idfs: &Idfs,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(&TokenizedSentence, f64, f64)> = sentences
        .iter()
        .map(|sentence| {
            let matching_idf: f64 = query
                .iter()
                .filter(|word| sentence.tokens.contains(word))
                .map(|word| idf_or_zero(idfs, word))
                .sum();
            let in_query = sentence
                .tokens
                .iter()
                .filter(|token| query.contains(*token))
                .count();
            let density = if sentence.tokens.is_empty() {
                0.0
            } else {
                in_query as f64 / sentence.tokens.len() as f64
            };
            (sentence, matching_idf, density)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(b.2.total_cmp(&a.2)));
    scored
        .into_iter()
        .take(n)
        .map(|(sentence, _, _)| sentence.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{idf::compute_idfs, tokenize::tokenize};

    fn query(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sentence(text: &str) -> TokenizedSentence {
        TokenizedSentence {
            text: text.to_string(),
            tokens: tokenize(text),
        }
    }

    #[test]
    fn test_top_files_orders_by_tf_idf() {
        let files: BTreeMap<String, Vec<String>> = [
            ("a.txt", "rust rust memory safety"),
            ("b.txt", "python garbage collection"),
            ("c.txt", "rust ownership"),
        ]
        .into_iter()
        .map(|(name, text)| (name.to_string(), tokenize(text)))
        .collect();
        let idfs = compute_idfs(files.values());

        let top = top_files(&query(&["rust"]), &files, &idfs, 2);
        assert_eq!(top, vec!["a.txt", "c.txt"]);

        let all = top_files(&query(&["rust"]), &files, &idfs, 10);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_top_files_unknown_query_word() {
        let files: BTreeMap<String, Vec<String>> =
            [("a.txt".to_string(), tokenize("alpha beta"))].into_iter().collect();
        let idfs = compute_idfs(files.values());
        assert_eq!(top_files(&query(&["gamma"]), &files, &idfs, 1), vec!["a.txt"]);
    }

    #[test]
    fn test_top_sentences_breaks_ties_by_density() {
        let sentences = vec![
            sentence("Neural networks learn weights through repeated training passes."),
            sentence("Neural networks learn."),
            sentence("Decision trees split data."),
        ];
        let idfs = compute_idfs(sentences.iter().map(|s| &s.tokens));

        let top = top_sentences(&query(&["neural", "learn"]), &sentences, &idfs, 1);
        assert_eq!(top, vec!["Neural networks learn."]);
    }

    #[test]
    fn test_top_sentences_prefers_higher_idf() {
        let sentences = vec![
            sentence("Rust guarantees memory safety."),
            sentence("Rust compiles quickly."),
            sentence("Rust has ownership."),
        ];
        let idfs = compute_idfs(sentences.iter().map(|s| &s.tokens));

        // "rust" appears everywhere (idf 0) so only "ownership" discriminates
        let top = top_sentences(&query(&["rust", "ownership"]), &sentences, &idfs, 2);
        assert_eq!(top[0], "Rust has ownership.");
        assert_eq!(top.len(), 2);
    }
}
