use std::cell::RefCell;
use std::rc::Rc;

use super::types::{Outcome, Role, Side};

/// Notifications the game emits for whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        player_side: Side,
        computer_side: Side,
    },
    TurnChanged {
        side: Side,
        role: Role,
    },
    GameOver {
        outcome: Outcome,
        winning_line: Option<[usize; 3]>,
    },
    GameRestarted,
}

pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Buffers events for hosts that drain them instead of reacting inline.
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GameListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
