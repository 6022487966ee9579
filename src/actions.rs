use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    SteerLeft,
    SteerRight,
}

#[derive(Default, Resource)]
pub struct ActionState {
    pressed: HashMap<PlayerAction, bool>,
}

impl ActionState {
    pub fn set(&mut self, action: PlayerAction, is_pressed: bool) {
        self.pressed.insert(action, is_pressed);
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        *self.pressed.get(&action).unwrap_or(&false)
    }

    /// Steering as a signed axis: -1 left, +1 right, 0 idle or both held.
    pub fn steer_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.pressed(PlayerAction::SteerLeft) {
            axis -= 1.0;
        }
        if self.pressed(PlayerAction::SteerRight) {
            axis += 1.0;
        }
        axis
    }
}
