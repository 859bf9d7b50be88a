//! Inverse document frequency

use std::collections::{HashMap, HashSet};

/// Token to IDF score
pub type Idfs = HashMap<String, f64>;

/// `ln(N / df)` for every token appearing in at least one of the documents.
///
/// # Examples
///
/// ```
/// use intro_ai::questions::compute_idfs;
///
/// let docs = vec![
///     vec!["rust".to_string(), "fast".to_string()],
///     vec!["rust".to_string()],
/// ];
/// let idfs = compute_idfs(&docs);
/// assert_eq!(idfs["rust"], 0.0);
/// assert!((idfs["fast"] - 2f64.ln()).abs() < 1e-12);
/// ```
pub fn compute_idfs<'a, I>(documents: I) -> Idfs
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut total = 0usize;
    let mut frequencies: HashMap<&str, usize> = HashMap::new();

    for tokens in documents {
        total += 1;
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in distinct {
            *frequencies.entry(token).or_default() += 1;
        }
    }

    frequencies
        .into_iter()
        .map(|(token, df)| (token.to_string(), (total as f64 / df as f64).ln()))
        .collect()
}

/// IDF of `token`, or zero for a token no document contains.
pub fn idf_or_zero(idfs: &Idfs, token: &str) -> f64 {
    match idfs.get(token) {
        Some(&idf) => idf,
        None => {
            log::debug!("query token '{token}' is not in the corpus vocabulary");
            0.0
        }
    }
}
