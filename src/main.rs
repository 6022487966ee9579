use bevy::prelude::*;

mod actions;
mod input;
mod player;
mod setup;
mod stack;
mod state;
mod track;

// re-export the bits we actually need in main
use actions::ActionState;
use input::{input_mapping_system, pause_toggle_system};
use player::PlayerPlugin;
use stack::CashStackPlugin;
use state::GameState;
use track::TrackPlugin;

fn main() {
    App::new()
        // core engine plugins
        .add_plugins(DefaultPlugins)
        // domain plugins
        .add_plugins(PlayerPlugin)    // the runner + follow camera
        .add_plugins(CashStackPlugin) // stack core: pickup, layout, collider, pulse
        .add_plugins(TrackPlugin)     // seeded course of cash + trap gates
        // init resources & game-state
        .init_resource::<ActionState>()
        .init_state::<GameState>()
        // camera + light
        .add_systems(Startup, setup::setup)
        // input + pause toggle each frame
        .add_systems(Update, pause_toggle_system)
        .add_systems(
            Update,
            input_mapping_system.run_if(in_state(GameState::Running)),
        )
        .run();
}
