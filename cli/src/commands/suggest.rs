use tictactoe_engine::EngineConfig;
use tictactoe_engine::tictactoe::{Mark, Side, SideAssignment, calculate_minimax_move};

use crate::board_notation::{parse_board, render_board};

pub fn suggest(board_text: &str, player_side: Side, config: &EngineConfig) -> Result<(), String> {
    let sides = SideAssignment::for_player(player_side);
    let board = parse_board(board_text, sides)?;

    println!("{}", render_board(&board, sides));
    match calculate_minimax_move(&board, Mark::Opponent, config.search.into()) {
        Some(index) => println!("Computer ({}) plays cell {}", sides.computer, index),
        None => println!("No move: the board is already decided or full"),
    }
    Ok(())
}
