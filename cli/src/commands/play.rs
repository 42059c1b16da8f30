use tictactoe_engine::tictactoe::{Side, TicTacToeGame, TurnResult};
use tictactoe_engine::{EngineConfig, log};

use crate::board_notation::render_board;
use crate::console_listener::ConsoleListener;

pub fn play(player_side: Side, moves: &[usize], config: &EngineConfig) -> Result<(), String> {
    let (game, leftover) = run_play(player_side, moves, config)?;

    if !leftover.is_empty() {
        println!("Ignoring moves {:?} given after the game ended.", leftover);
    }
    if game.outcome().is_none() {
        println!("Game still in progress after {} moves.", game.move_count());
    }
    Ok(())
}

/// Plays the scripted human moves, answering each with the computer's reply.
/// Returns the game and the moves that came after it ended.
fn run_play(
    player_side: Side,
    moves: &[usize],
    config: &EngineConfig,
) -> Result<(TicTacToeGame, Vec<usize>), String> {
    let mut game = TicTacToeGame::new(config.search.into());
    game.subscribe(ConsoleListener);
    game.choose_side(player_side).map_err(|e| e.to_string())?;
    let sides = game.sides().ok_or_else(|| "Sides were not assigned".to_string())?;

    let mut remaining = moves.iter();
    for &index in remaining.by_ref() {
        let result = game.apply_player_move(index).map_err(|e| e.to_string())?;
        println!("{}\n", render_board(game.board(), sides));
        if let TurnResult::GameOver(_) = result {
            break;
        }

        let (reply, result) = game
            .compute_and_apply_opponent_move()
            .map_err(|e| e.to_string())?;
        log!("Computer answered {} with {}", index, reply);
        println!("{}\n", render_board(game.board(), sides));
        if let TurnResult::GameOver(_) = result {
            break;
        }
    }

    Ok((game, remaining.as_slice().to_vec()))
}
