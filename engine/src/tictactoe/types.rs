use std::fmt;

use serde::{Deserialize, Serialize};

/// Occupant of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Opponent,
}

impl Mark {
    pub fn role(self) -> Option<Role> {
        match self {
            Mark::Empty => None,
            Mark::Player => Some(Role::Player),
            Mark::Opponent => Some(Role::Opponent),
        }
    }

    pub fn opponent(self) -> Option<Mark> {
        self.role().map(|role| role.other().mark())
    }
}

/// Who occupies a seat at the table: the human or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Opponent,
}

impl Role {
    pub fn mark(self) -> Mark {
        match self {
            Role::Player => Mark::Player,
            Role::Opponent => Mark::Opponent,
        }
    }

    pub fn other(self) -> Role {
        match self {
            Role::Player => Role::Opponent,
            Role::Opponent => Role::Player,
        }
    }
}

impl From<Role> for Mark {
    fn from(role: Role) -> Self {
        role.mark()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Player => write!(f, "player"),
            Role::Opponent => write!(f, "computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    X,
    O,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Side::X),
            "O" | "o" => Ok(Side::O),
            other => Err(format!("Unknown side '{}', expected X or O", other)),
        }
    }
}

/// Binding of the two sides to the human and the computer for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideAssignment {
    pub player: Side,
    pub computer: Side,
}

impl SideAssignment {
    pub fn for_player(player: Side) -> Self {
        Self {
            player,
            computer: player.other(),
        }
    }

    pub fn side_of(&self, role: Role) -> Side {
        match role {
            Role::Player => self.player,
            Role::Opponent => self.computer,
        }
    }

    pub fn role_of(&self, side: Side) -> Role {
        if side == self.player {
            Role::Player
        } else {
            Role::Opponent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Role> {
        match self {
            Outcome::PlayerWin => Some(Role::Player),
            Outcome::OpponentWin => Some(Role::Opponent),
            Outcome::Draw => None,
        }
    }

    pub fn winner_side(self, sides: SideAssignment) -> Option<Side> {
        self.winner().map(|role| sides.side_of(role))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "player wins"),
            Outcome::OpponentWin => write!(f, "computer wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingSideChoice,
    InProgress { to_move: Role },
    Terminal(Outcome),
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::AwaitingSideChoice => write!(f, "awaiting a side choice"),
            GamePhase::InProgress { to_move } => write!(f, "in progress ({} to move)", to_move),
            GamePhase::Terminal(outcome) => write!(f, "over ({})", outcome),
        }
    }
}

/// What the host learns after a move has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Continue { next: Role },
    GameOver(Outcome),
}
