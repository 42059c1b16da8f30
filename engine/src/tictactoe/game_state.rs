use crate::{GameError, log};
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::{SearchOptions, calculate_minimax_move};
use super::listener::{GameEvent, GameListener};
use super::types::{GamePhase, Mark, Outcome, Role, Side, SideAssignment, TurnResult};
use super::win_detector::{find_winning_line, is_line_complete};

/// One human against the minimax computer. The human always moves first.
pub struct TicTacToeGame {
    board: Board,
    move_count: usize,
    phase: GamePhase,
    sides: Option<SideAssignment>,
    search: SearchOptions,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl TicTacToeGame {
    pub fn new(search: SearchOptions) -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
            phase: GamePhase::AwaitingSideChoice,
            sides: None,
            search,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn sides(&self) -> Option<SideAssignment> {
        self.sides
    }

    pub fn player_side(&self) -> Option<Side> {
        self.sides.map(|sides| sides.player)
    }

    pub fn computer_side(&self) -> Option<Side> {
        self.sides.map(|sides| sides.computer)
    }

    pub fn active_role(&self) -> Option<Role> {
        match self.phase {
            GamePhase::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    pub fn active_side(&self) -> Option<Side> {
        let role = self.active_role()?;
        self.sides.map(|sides| sides.side_of(role))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        let role = self.outcome()?.winner()?;
        find_winning_line(&self.board, role.mark())
    }

    pub fn choose_side(&mut self, side: Side) -> Result<(), GameError> {
        if self.phase != GamePhase::AwaitingSideChoice {
            log!("Rejected side choice {}: game is {}", side, self.phase);
            return Err(GameError::invalid_transition("choose a side", self.phase));
        }

        let sides = SideAssignment::for_player(side);
        self.sides = Some(sides);
        self.phase = GamePhase::InProgress { to_move: Role::Player };
        log!("Player plays {}, computer plays {}", sides.player, sides.computer);

        self.emit(GameEvent::GameStarted {
            player_side: sides.player,
            computer_side: sides.computer,
        });
        self.emit(GameEvent::TurnChanged {
            side: sides.player,
            role: Role::Player,
        });
        Ok(())
    }

    pub fn apply_player_move(&mut self, index: usize) -> Result<TurnResult, GameError> {
        self.apply_move(Role::Player, index)
    }

    /// Best cell for the computer on the current board. Does not change the game.
    pub fn compute_opponent_move(&self) -> Result<usize, GameError> {
        let operation = "compute the computer move";
        if self.phase != (GamePhase::InProgress { to_move: Role::Opponent }) {
            return Err(GameError::invalid_transition(operation, self.phase));
        }
        calculate_minimax_move(&self.board, Mark::Opponent, self.search)
            .ok_or_else(|| GameError::invalid_transition(operation, self.phase))
    }

    pub fn apply_opponent_move(&mut self, index: usize) -> Result<TurnResult, GameError> {
        self.apply_move(Role::Opponent, index)
    }

    pub fn compute_and_apply_opponent_move(&mut self) -> Result<(usize, TurnResult), GameError> {
        let index = self.compute_opponent_move()?;
        let result = self.apply_opponent_move(index)?;
        Ok((index, result))
    }

    /// Clears the board and waits for a new side choice. A no-op before the first choice.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::AwaitingSideChoice {
            return;
        }
        log!("Restarting game that was {}", self.phase);

        self.board.reset();
        self.move_count = 0;
        self.sides = None;
        self.phase = GamePhase::AwaitingSideChoice;
        self.emit(GameEvent::GameRestarted);
    }

    fn apply_move(&mut self, role: Role, index: usize) -> Result<TurnResult, GameError> {
        let turn_check = match self.phase {
            GamePhase::InProgress { to_move } if to_move == role => Ok(()),
            GamePhase::InProgress { .. } => Err(GameError::InvalidMove {
                index,
                reason: "it is not that side's turn",
            }),
            phase => Err(GameError::invalid_transition("place a mark", phase)),
        };
        if let Err(err) = turn_check {
            log!("Rejected {} move at {}: {}", role, index, err);
            return Err(err);
        }

        if let Err(err) = self.board.place(index, role.mark()) {
            log!("Rejected {} move at {}: {}", role, index, err);
            return Err(err);
        }

        if let Some(sides) = self.sides {
            log!("{} ({}) took cell {}", role, sides.side_of(role), index);
        }
        Ok(self.end_turn(role))
    }

    fn end_turn(&mut self, mover: Role) -> TurnResult {
        self.move_count += 1;

        let outcome = if is_line_complete(&self.board, Mark::Player) {
            Some(Outcome::PlayerWin)
        } else if is_line_complete(&self.board, Mark::Opponent) {
            Some(Outcome::OpponentWin)
        } else if self.move_count >= BOARD_SIZE {
            Some(Outcome::Draw)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.phase = GamePhase::Terminal(outcome);
            log!("Game over after {} moves: {}", self.move_count, outcome);
            self.emit(GameEvent::GameOver {
                outcome,
                winning_line: self.winning_line(),
            });
            return TurnResult::GameOver(outcome);
        }

        let next = mover.other();
        self.phase = GamePhase::InProgress { to_move: next };
        if let Some(sides) = self.sides {
            self.emit(GameEvent::TurnChanged {
                side: sides.side_of(next),
                role: next,
            });
        }
        TurnResult::Continue { next }
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in self.listeners.iter_mut() {
            listener.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::EventLog;

    fn started_game(side: Side) -> (TicTacToeGame, EventLog) {
        let log = EventLog::new();
        let mut game = TicTacToeGame::default();
        game.subscribe(log.clone());
        game.choose_side(side).unwrap();
        log.take_events();
        (game, log)
    }

    #[test]
    fn test_new_game_awaits_side_choice() {
        let game = TicTacToeGame::default();
        assert_eq!(game.phase(), GamePhase::AwaitingSideChoice);
        assert_eq!(game.active_side(), None);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_choose_side_assigns_roles_and_player_moves_first() {
        let log = EventLog::new();
        let mut game = TicTacToeGame::default();
        game.subscribe(log.clone());

        game.choose_side(Side::O).unwrap();

        assert_eq!(game.player_side(), Some(Side::O));
        assert_eq!(game.computer_side(), Some(Side::X));
        assert_eq!(game.active_role(), Some(Role::Player));
        assert_eq!(game.active_side(), Some(Side::O));
        assert_eq!(
            log.take_events(),
            vec![
                GameEvent::GameStarted { player_side: Side::O, computer_side: Side::X },
                GameEvent::TurnChanged { side: Side::O, role: Role::Player },
            ]
        );
    }

    #[test]
    fn test_choose_side_twice_is_rejected() {
        let (mut game, _) = started_game(Side::X);
        let result = game.choose_side(Side::O);
        assert!(matches!(result, Err(GameError::InvalidStateTransition { .. })));
        assert_eq!(game.player_side(), Some(Side::X));
    }

    #[test]
    fn test_move_before_side_choice_is_rejected() {
        let mut game = TicTacToeGame::default();
        assert!(matches!(
            game.apply_player_move(4),
            Err(GameError::InvalidStateTransition { .. })
        ));
        assert!(matches!(
            game.compute_opponent_move(),
            Err(GameError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn test_player_move_flips_turn_and_signals() {
        let (mut game, log) = started_game(Side::X);

        let result = game.apply_player_move(4).unwrap();

        assert_eq!(result, TurnResult::Continue { next: Role::Opponent });
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.board().get(4), Ok(Mark::Player));
        assert_eq!(game.active_side(), Some(Side::O));
        assert_eq!(
            log.take_events(),
            vec![GameEvent::TurnChanged { side: Side::O, role: Role::Opponent }]
        );
    }

    #[test]
    fn test_player_cannot_move_on_computer_turn() {
        let (mut game, _) = started_game(Side::X);
        game.apply_player_move(4).unwrap();

        let result = game.apply_player_move(0);

        assert!(matches!(result, Err(GameError::InvalidMove { index: 0, .. })));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_computer_cannot_move_on_player_turn() {
        let (mut game, _) = started_game(Side::X);
        assert!(matches!(
            game.compute_opponent_move(),
            Err(GameError::InvalidStateTransition { .. })
        ));
        assert!(matches!(game.apply_opponent_move(0), Err(GameError::InvalidMove { index: 0, .. })));
    }

    #[test]
    fn test_occupied_and_out_of_range_moves_are_rejected() {
        let (mut game, _) = started_game(Side::X);
        assert_eq!(game.apply_player_move(9), Err(GameError::OutOfRange { index: 9 }));

        game.apply_player_move(4).unwrap();
        let result = game.apply_opponent_move(4);
        assert!(matches!(result, Err(GameError::InvalidMove { index: 4, .. })));
        assert_eq!(game.active_role(), Some(Role::Opponent));
    }

    #[test]
    fn test_compute_opponent_move_is_a_pure_query() {
        let (mut game, _) = started_game(Side::X);
        game.apply_player_move(4).unwrap();
        let before = *game.board();

        let first = game.compute_opponent_move().unwrap();
        let second = game.compute_opponent_move().unwrap();

        assert_eq!(first, second);
        assert_eq!(*game.board(), before);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_center_opening_gets_corner_reply() {
        let (mut game, _) = started_game(Side::X);
        game.apply_player_move(4).unwrap();

        let (index, result) = game.compute_and_apply_opponent_move().unwrap();

        assert!([0, 2, 6, 8].contains(&index));
        assert_eq!(result, TurnResult::Continue { next: Role::Player });
        assert_eq!(game.board().get(index), Ok(Mark::Opponent));
    }

    #[test]
    fn test_completing_top_row_ends_game_with_player_win() {
        // X X .
        // O O .
        // . . .
        let (mut game, log) = started_game(Side::X);
        game.apply_player_move(0).unwrap();
        game.apply_opponent_move(3).unwrap();
        game.apply_player_move(1).unwrap();
        game.apply_opponent_move(4).unwrap();
        log.take_events();

        let result = game.apply_player_move(2).unwrap();

        assert_eq!(result, TurnResult::GameOver(Outcome::PlayerWin));
        assert_eq!(game.outcome(), Some(Outcome::PlayerWin));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert_eq!(game.active_side(), None);
        assert_eq!(
            log.take_events(),
            vec![GameEvent::GameOver {
                outcome: Outcome::PlayerWin,
                winning_line: Some([0, 1, 2]),
            }]
        );
    }

    #[test]
    fn test_computer_win_is_reported() {
        let (mut game, _) = started_game(Side::O);
        game.apply_player_move(0).unwrap();
        game.apply_opponent_move(3).unwrap();
        game.apply_player_move(1).unwrap();
        game.apply_opponent_move(4).unwrap();
        game.apply_player_move(8).unwrap();

        let result = game.apply_opponent_move(5).unwrap();

        assert_eq!(result, TurnResult::GameOver(Outcome::OpponentWin));
        assert_eq!(game.winning_line(), Some([3, 4, 5]));
        assert_eq!(Outcome::OpponentWin.winner_side(game.sides().unwrap()), Some(Side::X));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let (mut game, _) = started_game(Side::X);
        for (index, player) in [(0, true), (3, false), (1, true), (4, false), (2, true)] {
            if player {
                game.apply_player_move(index).unwrap();
            } else {
                game.apply_opponent_move(index).unwrap();
            }
        }

        assert!(matches!(
            game.apply_opponent_move(5),
            Err(GameError::InvalidStateTransition { .. })
        ));
        assert!(matches!(
            game.compute_opponent_move(),
            Err(GameError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw_at_nine_moves() {
        // P O P
        // P O O
        // O P P
        let (mut game, _) = started_game(Side::X);
        let script = [
            (0, Role::Player),
            (1, Role::Opponent),
            (2, Role::Player),
            (4, Role::Opponent),
            (3, Role::Player),
            (5, Role::Opponent),
            (7, Role::Player),
            (6, Role::Opponent),
            (8, Role::Player),
        ];

        let mut last = None;
        for (index, role) in script {
            last = Some(match role {
                Role::Player => game.apply_player_move(index).unwrap(),
                Role::Opponent => game.apply_opponent_move(index).unwrap(),
            });
        }

        assert_eq!(last, Some(TurnResult::GameOver(Outcome::Draw)));
        assert_eq!(game.move_count(), 9);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_restart_clears_state_after_any_outcome() {
        let (mut game, log) = started_game(Side::X);
        game.apply_player_move(0).unwrap();
        game.apply_opponent_move(3).unwrap();
        game.apply_player_move(1).unwrap();
        game.apply_opponent_move(4).unwrap();
        game.apply_player_move(2).unwrap();
        log.take_events();

        game.restart();

        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.phase(), GamePhase::AwaitingSideChoice);
        assert_eq!(game.player_side(), None);
        assert_eq!(log.take_events(), vec![GameEvent::GameRestarted]);

        game.choose_side(Side::O).unwrap();
        assert_eq!(game.player_side(), Some(Side::O));
    }

    #[test]
    fn test_restart_is_tolerated_mid_game_and_before_start() {
        let mut game = TicTacToeGame::default();
        game.restart();
        assert_eq!(game.phase(), GamePhase::AwaitingSideChoice);

        game.choose_side(Side::X).unwrap();
        game.apply_player_move(4).unwrap();
        game.restart();

        assert_eq!(game.move_count(), 0);
        assert!(game.board().empty_cells().len() == BOARD_SIZE);
    }
}
