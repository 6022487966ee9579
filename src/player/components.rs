use bevy::prelude::*;

/// The moving agent. Runs forward on its own; input only steers.
#[derive(Component)]
pub struct Player {
    /// Steering clamps |x| to this half-width.
    pub x_clamp: f32,
    pub horizontal_speed: f32,
    pub forward_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x_clamp: 4.0,
            horizontal_speed: 8.0,
            forward_speed: 6.0,
        }
    }
}
