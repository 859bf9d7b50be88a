//! Random-surfer transition model

use std::collections::BTreeMap;

use super::{config::TransitionKind, corpus::Corpus};

/// Probability of visiting each page next, given the surfer is on `page`.
///
/// A page without outbound links (or unknown to the corpus) jumps uniformly
/// to any page. Pages with zero probability may be absent from the map.
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping: f64,
    kind: TransitionKind,
) -> BTreeMap<String, f64> {
    let total = corpus.len() as f64;
    let links = match corpus.links(page) {
        Some(links) if !links.is_empty() => links,
        _ => {
            return corpus
                .pages()
                .map(|p| (p.to_string(), 1.0 / total))
                .collect();
        }
    };
    let out_degree = links.len() as f64;

    match kind {
        TransitionKind::Mixture => {
            let mut distribution: BTreeMap<String, f64> = corpus
                .pages()
                .map(|p| (p.to_string(), (1.0 - damping) / total))
                .collect();
            for link in links {
                *distribution.entry(link.clone()).or_default() += damping / out_degree;
            }
            distribution
        }
        TransitionKind::Blended => {
            let jump = (1.0 - damping) / (out_degree + 1.0);
            let mut distribution: BTreeMap<String, f64> = links
                .iter()
                .map(|link| (link.clone(), damping / out_degree + jump))
                .collect();
            distribution.insert(page.to_string(), jump);
            distribution
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["2.html"]),
        ])
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mixture() {
        let model = transition_model(&corpus(), "1.html", 0.85, TransitionKind::Mixture);
        assert!(approx(model["1.html"], 0.05));
        assert!(approx(model["2.html"], 0.475));
        assert!(approx(model["3.html"], 0.475));
        assert!(approx(model.values().sum(), 1.0));
    }

    #[test]
    fn test_blended() {
        let model = transition_model(&corpus(), "1.html", 0.85, TransitionKind::Blended);
        assert!(approx(model["1.html"], 0.05));
        assert!(approx(model["2.html"], 0.425 + 0.05));
        assert!(approx(model.values().sum(), 1.0));
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let corpus = Corpus::from_links([("a.html", vec!["b.html"]), ("b.html", vec![])]);
        for kind in [TransitionKind::Mixture, TransitionKind::Blended] {
            let model = transition_model(&corpus, "b.html", 0.85, kind);
            assert!(approx(model["a.html"], 0.5));
            assert!(approx(model["b.html"], 0.5));
        }
    }
}
