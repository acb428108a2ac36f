//! Game State Machine
//!
//! Menu -> Playing -> GameOver -> Playing ..., with quit from the menu or
//! the game-over screen.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Menu,
    Playing,
    GameOver,
    Exited,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    ObstacleHit,
    PlayAgain,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::warn!("Rejected {:?} in state {:?}", action, from_state);
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Menu, GameAction::Start) => Some(FsmState::Playing),
            (FsmState::Menu, GameAction::Quit) => Some(FsmState::Exited),

            (FsmState::Playing, GameAction::ObstacleHit) => Some(FsmState::GameOver),

            (FsmState::GameOver, GameAction::PlayAgain) => Some(FsmState::Playing),
            (FsmState::GameOver, GameAction::Quit) => Some(FsmState::Exited),

            _ => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        self.state == FsmState::Exited
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
