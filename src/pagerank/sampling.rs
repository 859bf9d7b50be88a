//! PageRank estimation by random-walk sampling

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, distr::StandardUniform, prelude::IndexedRandom, rngs::StdRng};

use super::{Ranks, config::PageRankConfig, corpus::Corpus, transition::transition_model};

/// Draw a page according to `distribution`.
fn sample_page<'a, R: Rng>(distribution: &'a BTreeMap<String, f64>, rng: &mut R) -> &'a str {
    let ticket: f64 = rng.sample(StandardUniform);
    let mut cumulative = 0.0;
    let mut last = "";
    for (page, weight) in distribution {
        cumulative += weight;
        last = page.as_str();
        if ticket < cumulative {
            return last;
        }
    }
    // Floating-point shortfall in the cumulative sum
    last
}

/// Estimate PageRank with a walk of `config.samples` steps.
///
/// The first page is chosen uniformly; every later page is drawn from the
/// transition model of the previous one. Ranks are visit counts divided by
/// the number of samples, so they always sum to one.
///
/// # Errors
///
/// Returns an error for an empty corpus or an invalid configuration.
pub fn sample_pagerank(corpus: &Corpus, config: &PageRankConfig) -> Result<Ranks, crate::Error> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    sample_pagerank_with_rng(corpus, config, &mut rng)
}

/// [`sample_pagerank`] driven by a caller-supplied random number generator.
pub fn sample_pagerank_with_rng<R: Rng>(
    corpus: &Corpus,
    config: &PageRankConfig,
    rng: &mut R,
) -> Result<Ranks, crate::Error> {
    config.validate()?;
    let pages: Vec<&str> = corpus.pages().collect();
    let Some(first) = pages.choose(rng) else {
        return Err(crate::Error::EmptyCorpus);
    };

    let mut counts: BTreeMap<&str, usize> = pages.iter().map(|&p| (p, 0)).collect();
    let mut current = first.to_string();
    *counts.entry(*first).or_default() += 1;

    for _ in 1..config.samples {
        let distribution = transition_model(corpus, &current, config.damping, config.transition);
        let next = sample_page(&distribution, rng).to_string();
        if let Some(count) = counts.get_mut(next.as_str()) {
            *count += 1;
        }
        current = next;
    }

    log::info!("sampled {} steps over {} pages", config.samples, pages.len());
    let samples = config.samples as f64;
    Ok(counts
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / samples))
        .collect())
}
