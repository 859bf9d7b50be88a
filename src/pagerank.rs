//! PageRank over a small corpus of linked HTML pages.
//!
//! Two estimators are provided and should roughly agree: a random surfer
//! ([`sample_pagerank`]) and fixed-point relaxation ([`iterate_pagerank`]).

use std::collections::BTreeMap;

pub mod config;
pub mod corpus;
pub mod iteration;
pub mod sampling;
pub mod transition;

pub use config::{DAMPING, PageRankConfig, SAMPLES, TOLERANCE, TransitionKind};
pub use corpus::{Corpus, crawl, extract_links};
pub use iteration::iterate_pagerank;
pub use sampling::{sample_pagerank, sample_pagerank_with_rng};
pub use transition::transition_model;

/// Page name to estimated rank, in page order
pub type Ranks = BTreeMap<String, f64>;
