//! Questions command - Answer a query from a text corpus

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::questions::{RetrievalConfig, answer, load_files};

#[derive(Parser, Debug)]
#[command(about = "Answer a question from a directory of .txt files")]
pub struct QuestionsArgs {
    /// Directory of .txt documents
    pub corpus: PathBuf,

    /// JSON file with retrieval settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of files searched for sentences
    #[arg(long)]
    pub files: Option<usize>,

    /// Number of sentences printed
    #[arg(long)]
    pub sentences: Option<usize>,

    /// Query to answer (prompted for when absent)
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

fn prompt_query() -> Result<String> {
    print!("Query: ");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read query")?;
    Ok(line.trim().to_string())
}

pub fn execute(args: QuestionsArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => RetrievalConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RetrievalConfig::default(),
    };
    if let Some(n) = args.files {
        config = config.with_file_matches(n);
    }
    if let Some(n) = args.sentences {
        config = config.with_sentence_matches(n);
    }

    let files = load_files(&args.corpus)
        .with_context(|| format!("Failed to load corpus {}", args.corpus.display()))?;

    let query = match args.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    for sentence in answer(&files, &query, &config) {
        println!("{sentence}");
    }
    Ok(())
}
