use bevy::prelude::*;
use bevy::input::{keyboard::KeyCode, ButtonInput};

use crate::actions::{ActionState, PlayerAction};
use crate::state::GameState;

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(
        PlayerAction::SteerLeft,
        keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft),
    );
    action_state.set(
        PlayerAction::SteerRight,
        keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight),
    );
}

pub fn pause_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    current_state: Res<State<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        if current_state.get() == &GameState::Running {
            next_state.set(GameState::Paused);
            info!("Paused game");
        } else if current_state.get() == &GameState::Paused {
            next_state.set(GameState::Running);
            info!("Resumed game");
        }
    }
}
