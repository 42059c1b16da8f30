use std::fmt;

/// Contract violations reported by the board and the game state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidMove { index: usize, reason: &'static str },
    OutOfRange { index: usize },
    InvalidStateTransition { operation: &'static str, phase: String },
}

impl GameError {
    pub(crate) fn invalid_transition(operation: &'static str, phase: impl fmt::Display) -> Self {
        GameError::InvalidStateTransition {
            operation,
            phase: phase.to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at cell {}: {}", index, reason)
            }
            GameError::OutOfRange { index } => {
                write!(f, "Cell index {} is outside the board (0-8)", index)
            }
            GameError::InvalidStateTransition { operation, phase } => {
                write!(f, "Cannot {} while the game is {}", operation, phase)
            }
        }
    }
}

impl std::error::Error for GameError {}
