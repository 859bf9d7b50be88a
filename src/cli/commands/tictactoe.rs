//! Tic-tac-toe command - Find the optimal move or watch optimal self-play

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::{Board, Game, GameOutcome, minimax, minimax_value},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a tic-tac-toe position with minimax")]
pub struct TicTacToeArgs {
    /// Board as 9 cells in row-major order (X, O, . for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Play the position out with minimax on both sides
    #[arg(long)]
    pub self_play: bool,
}

fn describe(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    }
}

pub fn execute(args: TicTacToeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("Failed to parse board '{}'", args.board))?;

    if args.self_play {
        let mut game = Game::from_board(board);
        let outcome = game.play_out()?;
        for (ply, position) in game.boards()?.iter().enumerate() {
            print_section(&format!("Ply {ply}"));
            println!("{position}");
        }
        println!("\nOutcome: {}", describe(outcome));
        return Ok(());
    }

    println!("{board}\n");
    match minimax(&board) {
        Some(mv) => {
            print_kv("To move", &board.player().to_string());
            print_kv("Optimal move", &mv.to_string());
            print_kv("Value", &minimax_value(&board).to_string());
        }
        None => {
            let outcome = GameOutcome::of(&board).unwrap_or(GameOutcome::Draw);
            print_kv("Game over", &describe(outcome));
        }
    }
    Ok(())
}

