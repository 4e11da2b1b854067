//! Seams to the host platform: input sampling, frame presentation and the
//! frame clock. The simulation only ever talks to these.

use std::collections::HashSet;

use crate::entities::{Controls, Key};
use crate::error::GameError;
use crate::render::Frame;

/// Everything the platform observed since the previous poll.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    /// Keys currently held down.
    pub held: HashSet<Key>,
    /// Keys that went down since the last poll, in arrival order.
    pub pressed: Vec<Key>,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// What one duelist is asking for this tick, through its own binding.
    pub fn intent(&self, controls: &Controls) -> ControlIntent {
        ControlIntent {
            up: self.is_held(controls.up),
            down: self.is_held(controls.down),
            left: self.is_held(controls.left),
            right: self.is_held(controls.right),
            fire: self.was_pressed(controls.fire),
        }
    }
}

/// One duelist's requested actions for a tick. `fire` is edge-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Host services consumed by the match loop.
pub trait Platform {
    /// Sample input for the coming tick.
    fn poll(&mut self) -> Result<InputSnapshot, GameError>;

    /// Draw a finished render list and show it.
    fn present(&mut self, frame: &Frame) -> Result<(), GameError>;

    /// Block until the next tick boundary.
    fn wait_next_tick(&mut self);
}
