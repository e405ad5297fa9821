//! Input latch between the host event loop and the simulation
//!
//! Key events arrive at arbitrary times; the simulation reads one snapshot
//! per tick. Held intents stay set until released. Actions are latched once
//! per press and handed to exactly one tick.

use crate::sim::TickInput;

/// Continuous inputs, held until released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// One-shot inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TogglePause,
    ToggleHelp,
    Bomb,
    Restart,
}

#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    current: TickInput,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn held_mut(&mut self, intent: Intent) -> &mut bool {
        match intent {
            Intent::Up => &mut self.current.move_up,
            Intent::Down => &mut self.current.move_down,
            Intent::Left => &mut self.current.move_left,
            Intent::Right => &mut self.current.move_right,
            Intent::Fire => &mut self.current.fire,
        }
    }

    pub fn press(&mut self, intent: Intent) {
        *self.held_mut(intent) = true;
    }

    pub fn release(&mut self, intent: Intent) {
        *self.held_mut(intent) = false;
    }

    pub fn set(&mut self, intent: Intent, held: bool) {
        *self.held_mut(intent) = held;
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::Up => self.current.move_up,
            Intent::Down => self.current.move_down,
            Intent::Left => self.current.move_left,
            Intent::Right => self.current.move_right,
            Intent::Fire => self.current.fire,
        }
    }

    /// Latch an action for the next tick; repeated triggers collapse into one
    pub fn trigger(&mut self, action: Action) {
        let flag = match action {
            Action::TogglePause => &mut self.current.pause,
            Action::ToggleHelp => &mut self.current.help,
            Action::Bomb => &mut self.current.bomb,
            Action::Restart => &mut self.current.restart,
        };
        *flag = true;
    }

    /// Mirror a complete input (e.g. from the autopilot)
    pub fn follow(&mut self, input: &TickInput) {
        self.set(Intent::Up, input.move_up);
        self.set(Intent::Down, input.move_down);
        self.set(Intent::Left, input.move_left);
        self.set(Intent::Right, input.move_right);
        self.set(Intent::Fire, input.fire);
        let actions = [
            (input.pause, Action::TogglePause),
            (input.help, Action::ToggleHelp),
            (input.bomb, Action::Bomb),
            (input.restart, Action::Restart),
        ];
        for (pressed, action) in actions {
            if pressed {
                self.trigger(action);
            }
        }
    }

    /// Input for the next tick, without consuming pending actions
    pub fn peek(&self) -> TickInput {
        self.current
    }

    /// Drop pending actions once a tick has consumed them
    pub fn clear_actions(&mut self) {
        self.current.pause = false;
        self.current.help = false;
        self.current.bomb = false;
        self.current.restart = false;
    }

    /// Release every held intent (e.g. on focus loss)
    pub fn release_all(&mut self) {
        let actions = self.current;
        self.current = TickInput {
            move_up: false,
            move_down: false,
            move_left: false,
            move_right: false,
            fire: false,
            ..actions
        };
    }
}
