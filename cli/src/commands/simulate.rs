use tictactoe_engine::tictactoe::{Outcome, Side, TicTacToeGame, TurnResult};
use tictactoe_engine::{EngineConfig, log, trace};

use crate::session_rng::SessionRng;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationTally {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

pub fn simulate(
    games: u32,
    seed: Option<u64>,
    player_side: Side,
    config: &EngineConfig,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Simulating {} games with seed {}", games, rng.seed());

    let tally = run_simulation(games, &mut rng, player_side, config)?;

    println!(
        "{} games: computer won {}, drew {}, lost {} (seed {})",
        games,
        tally.opponent_wins,
        tally.draws,
        tally.player_wins,
        rng.seed()
    );
    Ok(())
}

fn run_simulation(
    games: u32,
    rng: &mut SessionRng,
    player_side: Side,
    config: &EngineConfig,
) -> Result<SimulationTally, String> {
    let mut game = TicTacToeGame::new(config.search.into());
    let mut tally = SimulationTally::default();

    for round in 0..games {
        game.choose_side(player_side).map_err(|e| e.to_string())?;

        while game.outcome().is_none() {
            let index = rng
                .pick(&game.board().empty_cells())
                .ok_or_else(|| "No empty cell left for the human".to_string())?;
            if let TurnResult::Continue { .. } =
                game.apply_player_move(index).map_err(|e| e.to_string())?
            {
                game.compute_and_apply_opponent_move()
                    .map_err(|e| e.to_string())?;
            }
        }

        match game.outcome() {
            Some(Outcome::PlayerWin) => tally.player_wins += 1,
            Some(Outcome::OpponentWin) => tally.opponent_wins += 1,
            Some(Outcome::Draw) => tally.draws += 1,
            None => {}
        }
        trace!("Game {} ended: {:?}", round + 1, game.outcome());
        game.restart();
    }

    Ok(tally)
}
