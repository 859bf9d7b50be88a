//! PageRank command - Rank the pages of an HTML corpus

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::print_ranks,
    pagerank::{PageRankConfig, Ranks, TransitionKind, crawl, iterate_pagerank, sample_pagerank},
};

#[derive(Parser, Debug)]
#[command(about = "Estimate PageRank by sampling and by iteration")]
pub struct PageRankArgs {
    /// Directory of .html pages
    pub corpus: PathBuf,

    /// JSON file with estimator settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Probability of following a link instead of jumping
    #[arg(long, short = 'd')]
    pub damping: Option<f64>,

    /// Number of random-walk samples
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Transition model (`mixture` or `blended`)
    #[arg(long)]
    pub transition: Option<TransitionKind>,

    /// Print both rankings as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    samples: usize,
    sampling: &'a Ranks,
    iteration: &'a Ranks,
}

impl PageRankArgs {
    /// File settings first, then explicit flags on top
    fn resolve_config(&self) -> Result<PageRankConfig> {
        let mut config = match &self.config {
            Some(path) => PageRankConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PageRankConfig::default(),
        };
        if let Some(damping) = self.damping {
            config = config.with_damping(damping);
        }
        if let Some(samples) = self.samples {
            config = config.with_samples(samples);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(transition) = self.transition {
            config = config.with_transition(transition);
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: PageRankArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let corpus = crawl(&args.corpus)
        .with_context(|| format!("Failed to crawl {}", args.corpus.display()))?;

    let sampled = sample_pagerank(&corpus, &config)?;
    let iterated = iterate_pagerank(&corpus, &config)?;

    if args.json {
        let report = Report {
            samples: config.samples,
            sampling: &sampled,
            iteration: &iterated,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_ranks(
        &format!("PageRank Results from Sampling (n = {})", config.samples),
        &sampled,
    );
    print_ranks("PageRank Results from Iteration", &iterated);
    Ok(())
}
