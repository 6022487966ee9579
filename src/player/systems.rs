// src/player/systems.rs

use bevy::prelude::*;

use crate::actions::ActionState;
use crate::setup::MainCamera;
use crate::stack::PlayerCollider;
use crate::player::components::Player;

pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Capsule3d::new(0.5, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(124, 144, 255),
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 1.0, 0.0),
        Player::default(),
        // base hitbox hugs the capsule; the stack stretches it forward
        PlayerCollider::new(Vec3::new(1.0, 2.0, 1.0), Vec3::ZERO, Vec3::ZERO),
    ));
}

/// Auto-run forward, steer laterally inside the lane.
pub fn move_player(
    time: Res<Time>,
    actions: Res<ActionState>,
    mut query: Query<(&Player, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (player, mut tf) in &mut query {
        let x = tf.translation.x + actions.steer_axis() * player.horizontal_speed * dt;
        tf.translation.x = x.clamp(-player.x_clamp, player.x_clamp);
        tf.translation.z += player.forward_speed * dt;
    }
}

/// Keeps the camera behind the runner, looking down the lane at the stack.
pub fn follow_camera(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = players.single() else { return };
    let Ok(mut cam) = cameras.single_mut() else { return };

    let target = player.translation + Vec3::new(0.0, 7.0, -9.0);
    let t = (time.delta_secs() * 5.0).min(1.0);
    cam.translation = cam.translation.lerp(target, t);
    cam.look_at(player.translation + Vec3::Z * 4.0, Vec3::Y);
}
