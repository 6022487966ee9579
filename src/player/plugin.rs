use bevy::prelude::*;

use crate::player::systems::{follow_camera, move_player, spawn_player};
use crate::state::GameState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player).add_systems(
            Update,
            (
                move_player.run_if(in_state(GameState::Running)),
                follow_camera.after(move_player).run_if(in_state(GameState::Running)),
            ),
        );
    }
}
