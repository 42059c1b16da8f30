mod audit;
mod board;
mod bot_controller;
mod game_state;
mod listener;
mod types;
mod win_detector;

pub use audit::{AuditReport, audit_engine};
pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{
    DRAW_SCORE, LOSS_SCORE, SearchOptions, WIN_SCORE, calculate_minimax_move, evaluate_position,
};
pub use game_state::TicTacToeGame;
pub use listener::{EventLog, GameEvent, GameListener};
pub use types::{GamePhase, Mark, Outcome, Role, Side, SideAssignment, TurnResult};
pub use win_detector::{WINNING_LINES, find_winning_line, is_line_complete};

#[cfg(test)]
mod playout_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn play_out<F>(side: Side, mut choose_player_move: F) -> TicTacToeGame
    where
        F: FnMut(&Board) -> usize,
    {
        let mut game = TicTacToeGame::default();
        game.choose_side(side).unwrap();

        loop {
            let index = choose_player_move(game.board());
            match game.apply_player_move(index).unwrap() {
                TurnResult::GameOver(_) => break,
                TurnResult::Continue { .. } => {}
            }
            match game.compute_and_apply_opponent_move().unwrap() {
                (_, TurnResult::GameOver(_)) => break,
                (_, TurnResult::Continue { .. }) => {}
            }
        }
        game
    }

    #[test]
    fn test_optimal_play_on_both_sides_is_a_draw() {
        let game = play_out(Side::X, |board| {
            calculate_minimax_move(board, Mark::Player, SearchOptions::default()).unwrap()
        });

        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.move_count(), BOARD_SIZE);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_random_humans_never_beat_the_computer() {
        let mut rng = StdRng::seed_from_u64(20240611);

        for _ in 0..200 {
            let game = play_out(Side::O, |board| {
                let moves = board.empty_cells();
                moves[rng.random_range(0..moves.len())]
            });

            let outcome = game.outcome().unwrap();
            assert_ne!(outcome, Outcome::PlayerWin, "board {:?}", game.board());
            assert_eq!(game.move_count() == BOARD_SIZE, outcome == Outcome::Draw);
            assert_eq!(game.board().marks_placed(), game.move_count());
        }
    }

    #[test]
    fn test_every_corner_opening_is_held() {
        for opening in [0, 2, 6, 8] {
            let mut first = true;
            let game = play_out(Side::X, |board| {
                if first {
                    first = false;
                    opening
                } else {
                    calculate_minimax_move(board, Mark::Player, SearchOptions::default()).unwrap()
                }
            });
            assert_eq!(game.outcome(), Some(Outcome::Draw), "opening {}", opening);
        }
    }

    #[test]
    fn test_restart_after_each_outcome_resets_board_and_counter() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = TicTacToeGame::default();

        for round in 0..20 {
            let side = if round % 2 == 0 { Side::X } else { Side::O };
            game.choose_side(side).unwrap();
            while game.outcome().is_none() {
                let moves = game.board().empty_cells();
                let index = moves[rng.random_range(0..moves.len())];
                if let TurnResult::Continue { .. } = game.apply_player_move(index).unwrap() {
                    game.compute_and_apply_opponent_move().unwrap();
                }
            }

            game.restart();
            assert_eq!(*game.board(), Board::new());
            assert_eq!(game.move_count(), 0);
            assert_eq!(game.phase(), GamePhase::AwaitingSideChoice);
        }
    }
}
