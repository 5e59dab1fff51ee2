//! Game loop ownership
//!
//! The simulation never decides whether it keeps running. The [`Runner`]
//! does: it is active from `start` until a frame reports the run is over, and
//! the host keeps requesting frames only while [`Runner::is_active`] is true.
//! Every entry point takes `&mut self`, so jump handling and frame updates
//! can never interleave.

use super::input::{InputAction, key_action, pointer_action};
use super::time::FrameClock;
use crate::settings::Settings;
use crate::sim::{GameState, GameView, advance, handle_jump, reset};

#[derive(Debug, Clone)]
pub struct Runner {
    state: GameState,
    clock: FrameClock,
    active: bool,
}

impl Runner {
    /// Wrap an idle game; nothing runs until [`Runner::start`]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            clock: FrameClock::new(),
            active: false,
        }
    }

    /// Start or restart a run and activate the loop
    pub fn start(&mut self) {
        reset(&mut self.state);
        self.clock.reset();
        self.active = true;
    }

    /// Should the host request another frame?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One animation frame. Returns the view while the loop is active,
    /// `None` once it has stopped.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<GameView> {
        if !self.active {
            return None;
        }
        let delta = self.clock.delta(timestamp_ms);
        let view = advance(&mut self.state, delta);
        if !view.running {
            self.active = false;
            log::info!("Loop stopped (score {})", view.score);
        }
        Some(view)
    }

    /// Apply an action. Returns true if it changed anything.
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Jump => handle_jump(&mut self.state),
            InputAction::Start => {
                self.start();
                true
            }
        }
    }

    /// `keydown` with a `KeyboardEvent.code`. Returns true if it was a game key.
    pub fn on_key(&mut self, code: &str, settings: &Settings) -> bool {
        match key_action(code, settings) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Click/tap on the canvas. Returns true if it was used.
    pub fn on_pointer(&mut self, settings: &Settings) -> bool {
        match pointer_action(self.state.phase, settings) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Read-only state for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
