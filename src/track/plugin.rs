use bevy::prelude::*;

use crate::track::systems::spawn_track;

/// Deterministic course parameters.
#[derive(Resource, Clone)]
pub struct TrackSettings {
    pub seed: u64,
    pub lane_half_width: f32,
    pub length: f32,
    /// Average forward distance between cash drops.
    pub cash_spacing: f32,
    /// Average forward distance between trap gates.
    pub trap_spacing: f32,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            seed: 1337,
            lane_half_width: 4.0,
            length: 400.0,
            cash_spacing: 6.0,
            trap_spacing: 60.0,
        }
    }
}

pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackSettings>()
            .add_systems(Startup, spawn_track);
    }
}
