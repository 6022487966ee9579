// src/track/systems.rs
//! Seeded one-shot course population: ground strip, cash drops, trap gates.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::stack::{CashUnit, CollisionBox};
use crate::track::components::Trap;
use crate::track::plugin::TrackSettings;

pub fn spawn_track(
    mut commands: Commands,
    settings: Res<TrackSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Stable per seed: same seed, same course
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);

    // 1) Ground strip
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(
            settings.lane_half_width * 2.0 + 4.0,
            0.1,
            settings.length + 40.0,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(64, 72, 64),
            ..default()
        })),
        Transform::from_xyz(0.0, -0.05, settings.length * 0.5),
    ));

    // 2) Cash drops, jittered across the lane
    let cash_mesh = meshes.add(Cuboid::new(0.8, 0.4, 0.8));
    let cash_mat = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(60, 179, 80),
        ..default()
    });

    let mut cash_count = 0;
    let mut z = 10.0;
    while z < settings.length {
        let x = rng.random_range(-settings.lane_half_width..settings.lane_half_width);
        commands.spawn((
            Mesh3d(cash_mesh.clone()),
            MeshMaterial3d(cash_mat.clone()),
            Transform::from_xyz(x, 0.75, z),
            CashUnit,
            CollisionBox::solid(Vec3::new(0.4, 0.2, 0.4)),
        ));
        cash_count += 1;
        z += settings.cash_spacing * rng.random_range(0.6..1.4);
    }

    // 3) Trap gates
    let trap_mesh = meshes.add(Cuboid::new(2.5, 1.5, 0.4));
    let trap_mat = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(200, 60, 50),
        ..default()
    });

    let mut trap_count = 0;
    let mut z = settings.trap_spacing;
    while z < settings.length {
        let x = rng.random_range(-settings.lane_half_width..settings.lane_half_width);
        commands.spawn((
            Mesh3d(trap_mesh.clone()),
            MeshMaterial3d(trap_mat.clone()),
            Transform::from_xyz(x, 0.75, z),
            Trap,
            CollisionBox::sensor(Vec3::new(1.25, 0.75, 0.2)),
        ));
        trap_count += 1;
        z += settings.trap_spacing * rng.random_range(0.8..1.2);
    }

    info!(
        "Track: spawned course seed={} length={} ({} cash, {} traps)",
        settings.seed, settings.length, cash_count, trap_count
    );
}
