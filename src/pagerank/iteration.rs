//! PageRank estimation by fixed-point iteration

use std::collections::BTreeMap;

use super::{Ranks, config::PageRankConfig, corpus::Corpus};

/// Iterate `PR(p) = (1-d)/N + d * Σ PR(i)/L(i)` until no page moves by more
/// than `config.tolerance`.
///
/// A page without outbound links counts as linking to every page, including
/// itself. The distribution computed on the converging sweep is returned.
///
/// # Errors
///
/// Returns an error for an empty corpus or an invalid configuration.
pub fn iterate_pagerank(corpus: &Corpus, config: &PageRankConfig) -> Result<Ranks, crate::Error> {
    config.validate()?;
    if corpus.is_empty() {
        return Err(crate::Error::EmptyCorpus);
    }

    let total = corpus.len() as f64;
    let damping = config.damping;
    let mut ranks: BTreeMap<&str, f64> = corpus.pages().map(|p| (p, 1.0 / total)).collect();

    for iteration in 1..=config.max_iterations {
        // Mass spread evenly by pages without links
        let dangling: f64 = corpus
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| ranks[page.as_str()] / total)
            .sum();

        let mut next: BTreeMap<&str, f64> = corpus
            .pages()
            .map(|p| (p, (1.0 - damping) / total + damping * dangling))
            .collect();
        for (page, links) in corpus.iter() {
            if links.is_empty() {
                continue;
            }
            let share = damping * ranks[page.as_str()] / links.len() as f64;
            for link in links {
                if let Some(rank) = next.get_mut(link.as_str()) {
                    *rank += share;
                }
            }
        }

        let delta = ranks
            .iter()
            .map(|(page, rank)| (rank - next[page]).abs())
            .fold(0.0, f64::max);
        log::debug!("iteration {iteration}: max change {delta:.6}");

        ranks = next;
        if delta <= config.tolerance {
            log::info!("converged after {iteration} iterations");
            return Ok(into_ranks(ranks));
        }
    }

    log::warn!(
        "no convergence within {} iterations; returning last estimate",
        config.max_iterations
    );
    Ok(into_ranks(ranks))
}

fn into_ranks(ranks: BTreeMap<&str, f64>) -> Ranks {
    ranks
        .into_iter()
        .map(|(page, rank)| (page.to_string(), rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links([("only.html", Vec::<&str>::new())]);
        let ranks = iterate_pagerank(&corpus, &PageRankConfig::default()).unwrap();
        assert!((ranks["only.html"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_chain_favours_sink() {
        // a -> b -> c, c dangling
        let corpus = Corpus::from_links([
            ("a.html", vec!["b.html"]),
            ("b.html", vec!["c.html"]),
            ("c.html", vec![]),
        ]);
        let ranks = iterate_pagerank(&corpus, &PageRankConfig::default()).unwrap();
        assert!(ranks["c.html"] > ranks["b.html"]);
        assert!(ranks["b.html"] > ranks["a.html"]);
        assert!((ranks.values().sum::<f64>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(matches!(
            iterate_pagerank(&Corpus::default(), &PageRankConfig::default()),
            Err(crate::Error::EmptyCorpus)
        ));
    }
}
