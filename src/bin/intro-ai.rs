//! intro-ai CLI - Classic search, logic, ranking and retrieval exercises
//!
//! This CLI provides a unified interface for:
//! - Solving tic-tac-toe positions with minimax
//! - Model checking the knights and knaves puzzles
//! - Estimating PageRank over an HTML corpus
//! - Answering questions from a text corpus with TF-IDF

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use intro_ai::cli::{
    commands::{knights, pagerank, questions, tictactoe},
    config::CommonConfig,
};

#[derive(Parser)]
#[command(name = "intro-ai")]
#[command(version, about = "Classic AI exercises", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal tic-tac-toe move
    Tictactoe(tictactoe::TicTacToeArgs),

    /// Print what each knights and knaves puzzle entails
    Knights(knights::KnightsArgs),

    /// Rank pages of an HTML corpus
    Pagerank(pagerank::PageRankArgs),

    /// Answer a question from a text corpus
    Questions(questions::QuestionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    CommonConfig {
        verbose: cli.verbose,
    }
    .init_logging();

    match cli.command {
        Commands::Tictactoe(args) => tictactoe::execute(args),
        Commands::Knights(args) => knights::execute(args),
        Commands::Pagerank(args) => pagerank::execute(args),
        Commands::Questions(args) => questions::execute(args),
    }
}
