use tictactoe_engine::EngineConfig;
use tictactoe_engine::tictactoe::{Side, audit_engine};

pub fn audit(player_side: Side, config: &EngineConfig) -> Result<(), String> {
    let report = audit_engine(player_side, config.search.into()).map_err(|e| e.to_string())?;

    println!(
        "{} distinct games: computer won {}, drew {}, lost {}",
        report.games, report.opponent_wins, report.draws, report.player_wins
    );
    if let Some(line) = report.first_loss {
        return Err(format!("Computer lost to human moves {:?}", line));
    }
    println!("The computer never loses.");
    Ok(())
}
