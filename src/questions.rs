//! Question answering over a directory of text files.
//!
//! Files are ranked against the query by TF-IDF, then the sentences of the
//! best files are ranked by matching IDF with query term density as the
//! tie-breaker.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fs,
    path::Path,
};

pub mod config;
pub mod idf;
pub mod ranking;
pub mod tokenize;

pub use config::{FILE_MATCHES, RetrievalConfig, SENTENCE_MATCHES};
pub use idf::{Idfs, compute_idfs};
pub use ranking::{TokenizedSentence, top_files, top_sentences};
pub use tokenize::{split_sentences, tokenize};

/// Read every `.txt` file in `directory`, keyed by filename.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the directory or a file cannot be read.
pub fn load_files(directory: &Path) -> Result<BTreeMap<String, String>, crate::Error> {
    let entries = fs::read_dir(directory)
        .map_err(|e| crate::Error::io(format!("read directory {}", directory.display()), e))?;

    let mut files = BTreeMap::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| crate::Error::io(format!("list directory {}", directory.display()), e))?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filename.ends_with(".txt") {
            continue;
        }
        let path = entry.path();
        let contents = fs::read_to_string(&path)
            .map_err(|e| crate::Error::io(format!("read file {}", path.display()), e))?;
        files.insert(filename, contents);
    }

    log::info!("loaded {} files from {}", files.len(), directory.display());
    Ok(files)
}

/// Every distinct sentence of `text` that has at least one token.
///
/// Each line is a passage; a sentence repeated later keeps its first position.
pub fn sentences_of(text: &str) -> Vec<TokenizedSentence> {
    let mut seen = HashSet::new();
    let mut sentences = Vec::new();
    for passage in text.lines() {
        for sentence in split_sentences(passage) {
            let tokens = tokenize(&sentence);
            if tokens.is_empty() || !seen.insert(sentence.clone()) {
                continue;
            }
            sentences.push(TokenizedSentence {
                text: sentence,
                tokens,
            });
        }
    }
    sentences
}

/// The distinct tokens of a query.
pub fn query_tokens(query: &str) -> BTreeSet<String> {
    tokenize(query).into_iter().collect()
}

/// Answer `query` from the loaded `files`.
///
/// Returns the best sentences, best first.
pub fn answer(
    files: &BTreeMap<String, String>,
    query: &str,
    config: &RetrievalConfig,
) -> Vec<String> {
    let file_words: BTreeMap<String, Vec<String>> = files
        .iter()
        .map(|(name, contents)| (name.clone(), tokenize(contents)))
        .collect();
    let file_idfs = compute_idfs(file_words.values());

    let query = query_tokens(query);
    let filenames = top_files(&query, &file_words, &file_idfs, config.file_matches);
    log::info!("top files: {}", filenames.join(", "));

    let mut seen = HashSet::new();
    let mut sentences = Vec::new();
    for name in &filenames {
        for sentence in sentences_of(&files[name]) {
            if seen.insert(sentence.text.clone()) {
                sentences.push(sentence);
            }
        }
    }

    let sentence_idfs = compute_idfs(sentences.iter().map(|s| &s.tokens));
    top_sentences(&query, &sentences, &sentence_idfs, config.sentence_matches)
}
