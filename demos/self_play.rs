//! Optimal self-play from every opening
//!
//! This example shows:
//! - Minimax choosing the centre on the empty board
//! - The value of each first move for X
//! - A full game where both sides play minimax

use intro_ai::tictactoe::{Board, Game, GameOutcome, Move, minimax_value};

fn main() -> anyhow::Result<()> {
    println!("PART 1: VALUE OF EACH OPENING");
    println!("─────────────────────────────");
    let empty = Board::initial_state();
    for row in 0..3 {
        let values: Vec<String> = (0..3)
            .map(|col| -> anyhow::Result<String> {
                let board = empty.result(Move::new(row, col))?;
                Ok(format!("{:>3}", minimax_value(&board)))
            })
            .collect::<anyhow::Result<_>>()?;
        println!("  {}", values.join(" "));
    }
    println!();

    println!("PART 2: OPTIMAL SELF-PLAY");
    println!("─────────────────────────");
    let game = Game::self_play()?;
    for (ply, board) in game.boards()?.iter().enumerate().skip(1) {
        println!("Ply {ply}: {} plays {}", player_of(ply), game.moves[ply - 1]);
        println!("{board}\n");
    }
    match game.outcome() {
        Some(GameOutcome::Win(player)) => println!("Outcome: {player} wins"),
        Some(GameOutcome::Draw) => println!("Outcome: draw"),
        None => println!("Outcome: unfinished"),
    }
    Ok(())
}

fn player_of(ply: usize) -> &'static str {
    if ply % 2 == 1 { "X" } else { "O" }
}
