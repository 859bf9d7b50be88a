//! Word and sentence tokenization

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// English stopwords, as shipped with the NLTK stopword corpus.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

// Apostrophes split words, so "don't" yields the stopwords "don" and "t".
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("word pattern is valid"));

/// Lowercased words of `document` in order, without stopwords or punctuation.
///
/// # Examples
///
/// ```
/// use intro_ai::questions::tokenize;
///
/// assert_eq!(tokenize("The Quick, Fox!"), vec!["quick", "fox"]);
/// ```
pub fn tokenize(document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOPWORD_SET.contains(word))
        .map(str::to_string)
        .collect()
}

/// Split a passage into sentences ending in `.`, `!` or `?`.
///
/// A terminator only ends a sentence when whitespace or the end of the
/// passage follows it, so "3.14" and "e.g." inside a word stay intact.
/// Closing quotes and brackets after the terminator stay with the sentence.
pub fn split_sentences(passage: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = passage.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        while let Some(&(_, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                chars.next();
            } else {
                break;
            }
        }
        let end = chars.peek().map_or(passage.len(), |&(i, _)| i);
        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary {
            push_trimmed(&mut sentences, &passage[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &passage[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        sentences.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stopwords_and_punctuation() {
        assert_eq!(tokenize("The Quick, Fox!"), vec!["quick", "fox"]);
        assert_eq!(
            tokenize("What is a neural network? -- It's a model."),
            vec!["neural", "network", "model"]
        );
        assert!(tokenize("... ,;:!").is_empty());
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize("Python's syntax isn't hard"), vec!["python", "syntax", "hard"]);
    }

    #[test]
    fn test_tokenize_keeps_numbers() {
        assert_eq!(tokenize("Released in 1991"), vec!["released", "1991"]);
    }

    #[test]
    fn test_split_sentences() {
        let passage = "Python was created in 1991. Is it popular? Yes! Version 3.12 is out";
        assert_eq!(
            split_sentences(passage),
            vec![
                "Python was created in 1991.",
                "Is it popular?",
                "Yes!",
                "Version 3.12 is out",
            ]
        );
    }

    #[test]
    fn test_split_sentences_keeps_closing_quote() {
        assert_eq!(
            split_sentences(r#"He said "stop." Then left."#),
            vec![r#"He said "stop.""#, "Then left."]
        );
        assert!(split_sentences("   ").is_empty());
    }
}
