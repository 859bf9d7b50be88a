//! Knights command - Solve the knights and knaves puzzles

use anyhow::Result;
use clap::Parser;

use crate::knights::{Solution, candidate_symbols, puzzles, solve};

#[derive(Parser, Debug)]
#[command(about = "Solve the knights and knaves puzzles")]
pub struct KnightsArgs {
    /// Also print each puzzle's knowledge base
    #[arg(long)]
    pub show_knowledge: bool,
}

pub fn execute(args: KnightsArgs) -> Result<()> {
    let candidates = candidate_symbols();

    for puzzle in puzzles() {
        println!("{}", puzzle.name);
        if args.show_knowledge {
            println!("    KB: {}", puzzle.knowledge);
        }
        match solve(&puzzle, &candidates)? {
            Solution::NotImplemented => println!("    Not yet implemented."),
            Solution::Entailed(symbols) => {
                for symbol in symbols {
                    println!("    {symbol}");
                }
            }
        }
    }

    Ok(())
}
