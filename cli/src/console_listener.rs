use tictactoe_engine::tictactoe::{GameEvent, GameListener, Outcome, Role};

/// Prints game events to stdout the way a UI would show them.
pub struct ConsoleListener;

impl GameListener for ConsoleListener {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                player_side,
                computer_side,
            } => println!("You play {}, the computer plays {}.", player_side, computer_side),
            GameEvent::TurnChanged { side, role } => match role {
                Role::Player => println!("Your turn ({}).", side),
                Role::Opponent => println!("Computer's turn ({}).", side),
            },
            GameEvent::GameOver {
                outcome,
                winning_line,
            } => {
                let text = match outcome {
                    Outcome::PlayerWin => "You win!",
                    Outcome::OpponentWin => "The computer wins!",
                    Outcome::Draw => "Draw.",
                };
                match winning_line {
                    Some(line) => println!("{} Winning line: {:?}", text, line),
                    None => println!("{}", text),
                }
            }
            GameEvent::GameRestarted => println!("Board cleared."),
        }
    }
}
