use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn setup(mut commands: Commands) {
    // 1) Light
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 14.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 2) Camera (follow_camera re-aims it every frame)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 7.0, -9.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}
