//! How closely random-walk sampling tracks iterated PageRank
//!
//! Usage: cargo run --example rank_convergence [CORPUS_DIR]
//!
//! Without a directory a small built-in link graph is used.

use std::path::PathBuf;

use intro_ai::pagerank::{Corpus, PageRankConfig, crawl, iterate_pagerank, sample_pagerank};

fn built_in_corpus() -> Corpus {
    Corpus::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
        ("5.html", vec![]),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let corpus = match std::env::args().nth(1) {
        Some(dir) => crawl(&PathBuf::from(dir))?,
        None => built_in_corpus(),
    };

    let reference = iterate_pagerank(&corpus, &PageRankConfig::default())?;
    println!("Iterated ranks");
    for (page, rank) in &reference {
        println!("  {page}: {rank:.4}");
    }
    println!();

    println!("{:>8}  {:>10}", "samples", "max error");
    for samples in [100, 1_000, 10_000, 100_000] {
        let config = PageRankConfig::default().with_samples(samples).with_seed(0);
        let sampled = sample_pagerank(&corpus, &config)?;
        let error = reference
            .iter()
            .map(|(page, rank)| (sampled[page] - rank).abs())
            .fold(0.0, f64::max);
        println!("{samples:>8}  {error:>10.4}");
    }
    Ok(())
}
