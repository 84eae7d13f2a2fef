//! Game state machine
//!
//! Idle -> Running via Start, Running <-> Paused via Pause/Resume, and Reset
//! drops back to Idle from anywhere. Invalid transitions are rejected.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Reset,
}

/// Game finite state machine
pub struct GameFsm {
    phase: GamePhase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; returns whether it was applied.
    pub fn transition(&mut self, action: GameAction) -> bool {
        match self.next_phase(action) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    fn next_phase(&self, action: GameAction) -> Option<GamePhase> {
        match (self.phase, action) {
            (GamePhase::Idle, GameAction::Start) => Some(GamePhase::Running),
            (GamePhase::Running, GameAction::Pause) => Some(GamePhase::Paused),
            (GamePhase::Paused, GameAction::Resume) => Some(GamePhase::Running),
            (_, GameAction::Reset) => Some(GamePhase::Idle),
            _ => None,
        }
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
