use std::collections::HashMap;

use crate::{GameError, log};
use super::board::Board;
use super::bot_controller::SearchOptions;
use super::game_state::TicTacToeGame;
use super::types::{GamePhase, Outcome, Role, Side, TurnResult};

/// Tally of every game the computer can be dragged into by the human.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub games: usize,
    pub player_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    /// Human moves of the first game the computer lost, if any.
    pub first_loss: Option<Vec<usize>>,
}

impl AuditReport {
    pub fn computer_never_loses(&self) -> bool {
        self.player_wins == 0
    }

    fn record(&mut self, outcome: Outcome, human_moves: &[usize]) {
        self.games += 1;
        match outcome {
            Outcome::PlayerWin => {
                self.player_wins += 1;
                if self.first_loss.is_none() {
                    self.first_loss = Some(human_moves.to_vec());
                }
            }
            Outcome::OpponentWin => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

struct Auditor {
    player_side: Side,
    search: SearchOptions,
    // The computer's reply is a pure function of the board, so each one is searched once.
    replies: HashMap<Board, usize>,
    report: AuditReport,
}

/// Plays the computer against every possible sequence of human moves.
pub fn audit_engine(player_side: Side, search: SearchOptions) -> Result<AuditReport, GameError> {
    let mut auditor = Auditor {
        player_side,
        search,
        replies: HashMap::new(),
        report: AuditReport::default(),
    };
    let mut human_moves = Vec::new();
    auditor.explore(&mut human_moves)?;

    log!(
        "Audit finished: {} games, {} computer wins, {} draws, {} player wins",
        auditor.report.games,
        auditor.report.opponent_wins,
        auditor.report.draws,
        auditor.report.player_wins
    );
    Ok(auditor.report)
}

impl Auditor {
    fn explore(&mut self, human_moves: &mut Vec<usize>) -> Result<(), GameError> {
        let game = self.replay(human_moves)?;

        match game.phase() {
            GamePhase::Terminal(outcome) => self.report.record(outcome, human_moves),
            GamePhase::InProgress { to_move: Role::Player } => {
                for index in game.board().empty_cells() {
                    human_moves.push(index);
                    self.explore(human_moves)?;
                    human_moves.pop();
                }
            }
            phase => return Err(GameError::invalid_transition("audit a position", phase)),
        }
        Ok(())
    }

    fn replay(&mut self, human_moves: &[usize]) -> Result<TicTacToeGame, GameError> {
        let mut game = TicTacToeGame::new(self.search);
        game.choose_side(self.player_side)?;

        for &index in human_moves {
            if let TurnResult::Continue { .. } = game.apply_player_move(index)? {
                let reply = match self.replies.get(game.board()) {
                    Some(&reply) => reply,
                    None => {
                        let reply = game.compute_opponent_move()?;
                        self.replies.insert(*game.board(), reply);
                        reply
                    }
                };
                game.apply_opponent_move(reply)?;
            }
        }
        Ok(game)
    }
}
