// src/stack/systems.rs
//! Contact detection and the aggregation flow: pickups grow the stack, trap
//! gates bleed it, and every frame the queue is re-laid-out behind the runner.

use bevy::prelude::*;

use crate::player::Player;
use crate::track::Trap;

use crate::stack::collider::PlayerCollider;
use crate::stack::components::{aabb_overlap, CashUnit, CollisionBox, DefaultUnitScale, PulseAnim};
use crate::stack::layout::{advance_layout, entrance_position};
use crate::stack::plugin::{CashContact, TrapContact};
use crate::stack::store::CashStack;
use crate::stack::tuning::StackTuning;

type UnitQuery<'w, 's> =
    Query<'w, 's, (&'static mut Transform, &'static mut CollisionBox), (With<CashUnit>, Without<Player>)>;

/// Sweeps the player's (grown) hitbox against every loose cash unit.
/// Units already riding the stack are triggers and are skipped.
pub fn detect_cash_contacts(
    players: Query<(&Transform, &PlayerCollider), With<Player>>,
    units: Query<(Entity, &Transform, &CollisionBox), With<CashUnit>>,
    mut contacts: EventWriter<CashContact>,
) {
    let Ok((player_tf, collider)) = players.single() else { return };
    let center = collider.world_center(player_tf.translation);
    let half = collider.half_extents();

    for (entity, tf, bx) in &units {
        if bx.trigger {
            continue;
        }
        if aabb_overlap(center, half, tf.translation, bx.half_extents) {
            contacts.write(CashContact(entity));
        }
    }
}

/// Handles one pickup per contact event:
/// capture the default scale once, grow the hitbox, push, flip the unit to
/// trigger, place it at the entrance slot, settle the queue immediately, and
/// restart the pulse on every rider.
pub fn process_cash_pickups(
    time: Res<Time>,
    tuning: Res<StackTuning>,
    mut contacts: EventReader<CashContact>,
    mut stack: ResMut<CashStack>,
    mut default_scale: ResMut<DefaultUnitScale>,
    mut commands: Commands,
    mut players: Query<(&Transform, &mut PlayerCollider), With<Player>>,
    mut units: UnitQuery,
) {
    let Ok((player_tf, mut collider)) = players.single_mut() else {
        contacts.clear();
        return;
    };
    let agent_pos = player_tf.translation;

    for &CashContact(unit) in contacts.read() {
        // stale event, or a unit grabbed earlier this frame
        let Ok((unit_tf, bx)) = units.get(unit) else { continue };
        if bx.trigger {
            continue;
        }

        if default_scale.0.is_none() {
            default_scale.0 = Some(unit_tf.scale);
        }

        collider.grow(tuning.unit_depth);

        let top_pos = stack
            .peek_top()
            .and_then(|top| units.get(top).ok().map(|(tf, _)| tf.translation));
        let entrance = entrance_position(agent_pos, top_pos, stack.len(), &tuning);

        stack.push(unit);

        if let Ok((mut unit_tf, mut bx)) = units.get_mut(unit) {
            bx.trigger = true;
            unit_tf.translation = entrance;
        }

        // settle the whole queue now instead of waiting for the layout tick
        apply_layout(agent_pos, time.delta_secs(), &tuning, &stack, &mut units);

        // every rider pulses, not just the newcomer
        for rider in stack.iter_top_down() {
            commands.entity(rider).insert(PulseAnim::start());
        }
    }
}

/// Checks every trap gate against every stacked unit. A hit names the exact
/// unit the gate touched; that unit and everything collected after it go.
pub fn detect_trap_contacts(
    stack: Res<CashStack>,
    traps: Query<(&Transform, &CollisionBox), With<Trap>>,
    units: Query<(&Transform, &CollisionBox), With<CashUnit>>,
    mut contacts: EventWriter<TrapContact>,
) {
    if stack.is_empty() {
        return;
    }

    for (trap_tf, trap_box) in &traps {
        for unit in stack.iter_top_down() {
            let Ok((unit_tf, unit_box)) = units.get(unit) else { continue };
            if aabb_overlap(
                trap_tf.translation,
                trap_box.half_extents,
                unit_tf.translation,
                unit_box.half_extents,
            ) {
                contacts.write(TrapContact(unit));
            }
        }
    }
}

/// Pops the stack down to each reported unit, shrinking the hitbox once per
/// released unit. Units already gone by the time their event arrives are
/// silent no-ops. Released units stay in the world where they fell.
pub fn process_trap_hits(
    tuning: Res<StackTuning>,
    mut contacts: EventReader<TrapContact>,
    mut stack: ResMut<CashStack>,
    mut players: Query<&mut PlayerCollider, With<Player>>,
) {
    let Ok(mut collider) = players.single_mut() else {
        contacts.clear();
        return;
    };

    for &TrapContact(unit) in contacts.read() {
        let dropped = stack.pop_until_inclusive(unit);
        for _ in &dropped {
            collider.shrink(tuning.unit_depth);
        }
        if !dropped.is_empty() {
            info!("Stack: trap took {} unit(s), {} left", dropped.len(), stack.len());
        }
    }
}

/// Regular per-tick layout pass. The pickup handler also runs the same pass
/// on demand, so it must stay safe to apply twice in one frame.
pub fn drive_stack_layout(
    time: Res<Time>,
    tuning: Res<StackTuning>,
    stack: Res<CashStack>,
    players: Query<&Transform, With<Player>>,
    mut units: UnitQuery,
) {
    let Ok(player_tf) = players.single() else { return };
    apply_layout(player_tf.translation, time.delta_secs(), &tuning, &stack, &mut units);
}

/// Drives every live pulse one frame. Finished pulses snap back to the
/// captured default scale, whatever the frame timing did to the axes, and
/// keep doing so even for units a trap released mid-animation.
pub fn animate_pulses(
    time: Res<Time>,
    tuning: Res<StackTuning>,
    default_scale: Res<DefaultUnitScale>,
    mut commands: Commands,
    mut pulses: Query<(Entity, &mut Transform, &mut PulseAnim)>,
) {
    let dt = time.delta_secs();

    for (entity, mut tf, mut pulse) in &mut pulses {
        if pulse.advance(dt, tuning.pulse_duration, &mut tf.scale) {
            if let Some(scale) = default_scale.0 {
                tf.scale = scale;
            }
            commands.entity(entity).remove::<PulseAnim>();
        }
    }
}

/// Gathers the stacked units' positions top-down, runs the layout math, and
/// writes the results back. Units missing from the world are skipped.
fn apply_layout(
    agent_pos: Vec3,
    dt: f32,
    tuning: &StackTuning,
    stack: &CashStack,
    units: &mut UnitQuery,
) {
    let mut handles = Vec::with_capacity(stack.len());
    let mut positions = Vec::with_capacity(stack.len());
    for unit in stack.iter_top_down() {
        if let Ok((tf, _)) = units.get(unit) {
            handles.push(unit);
            positions.push(tf.translation);
        }
    }

    advance_layout(agent_pos, dt, tuning, &mut positions);

    for (unit, pos) in handles.into_iter().zip(positions) {
        if let Ok((mut tf, _)) = units.get_mut(unit) {
            tf.translation = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<StackTuning>()
            .init_resource::<CashStack>()
            .init_resource::<DefaultUnitScale>()
            .add_event::<CashContact>()
            .add_event::<TrapContact>()
            .add_systems(
                Update,
                (
                    detect_cash_contacts,
                    process_cash_pickups.after(detect_cash_contacts),
                    detect_trap_contacts.after(process_cash_pickups),
                    process_trap_hits.after(detect_trap_contacts),
                    drive_stack_layout.after(process_trap_hits),
                ),
            );
        app
    }

    fn spawn_player_at(app: &mut App, pos: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(pos),
                Player::default(),
                PlayerCollider::new(Vec3::new(1.0, 2.0, 1.0), Vec3::ZERO, Vec3::ZERO),
            ))
            .id()
    }

    fn spawn_cash_at(app: &mut App, pos: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(pos),
                CashUnit,
                CollisionBox::solid(Vec3::new(0.4, 0.2, 0.4)),
            ))
            .id()
    }

    #[test]
    fn pickup_grows_the_stack_and_the_collider() {
        let mut app = test_app();
        let player = spawn_player_at(&mut app, Vec3::new(0.0, 1.0, 0.0));
        let cash = spawn_cash_at(&mut app, Vec3::new(0.2, 0.75, 0.5));

        app.update();

        let stack = app.world().resource::<CashStack>();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek_top(), Some(cash));

        let collider = app.world().get::<PlayerCollider>(player).unwrap();
        assert_eq!(collider.size.z, collider.base_size.z + 1.0);

        // stacked unit is now a trigger riding in slot 1
        let bx = app.world().get::<CollisionBox>(cash).unwrap();
        assert!(bx.trigger);
        let tf = app.world().get::<Transform>(cash).unwrap();
        assert!((tf.translation.z - 1.0).abs() < 1e-5);

        // default scale was captured from the first unit
        assert_eq!(
            app.world().resource::<DefaultUnitScale>().0,
            Some(Vec3::ONE)
        );

        // the newcomer got a pulse
        assert!(app.world().get::<PulseAnim>(cash).is_some());
    }

    #[test]
    fn second_pass_over_a_stacked_unit_does_not_double_push() {
        let mut app = test_app();
        let player = spawn_player_at(&mut app, Vec3::new(0.0, 1.0, 0.0));
        spawn_cash_at(&mut app, Vec3::new(0.0, 0.75, 0.5));

        app.update();
        // the stacked unit still overlaps the hitbox next frame, but it is a
        // trigger now and must be ignored
        app.update();

        assert_eq!(app.world().resource::<CashStack>().len(), 1);
        let collider = app.world().get::<PlayerCollider>(player).unwrap();
        assert_eq!(collider.size.z, collider.base_size.z + 1.0);
    }

    #[test]
    fn trap_bleeds_the_stack_down_to_the_touched_unit() {
        let mut app = test_app();
        let player = spawn_player_at(&mut app, Vec3::new(0.0, 1.0, 0.0));

        // pre-stack three riders by hand
        let mut riders = Vec::new();
        for i in 0..3 {
            let cash = spawn_cash_at(&mut app, Vec3::new(0.0, 0.75, 1.0 + i as f32));
            app.world_mut().get_mut::<CollisionBox>(cash).unwrap().trigger = true;
            app.world_mut().resource_mut::<CashStack>().push(cash);
            let mut collider = app.world_mut().get_mut::<PlayerCollider>(player).unwrap();
            collider.grow(1.0);
            riders.push(cash);
        }

        // trap gate sitting on the middle rider (slot z = 2)
        app.world_mut().spawn((
            Transform::from_xyz(0.0, 0.75, 2.0),
            Trap,
            CollisionBox::sensor(Vec3::new(1.25, 0.75, 0.2)),
        ));

        app.update();

        let stack = app.world().resource::<CashStack>();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek_top(), Some(riders[0]));

        // two shrinks, matching the two released units
        let collider = app.world().get::<PlayerCollider>(player).unwrap();
        assert_eq!(collider.size.z, collider.base_size.z + 1.0);
    }

    #[test]
    fn finished_pulse_snaps_the_unit_back_to_the_default_scale() {
        use std::time::Duration;

        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<StackTuning>()
            .insert_resource(DefaultUnitScale(Some(Vec3::ONE)))
            .add_systems(Update, animate_pulses);

        let cash = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 0.75, 1.0),
                CashUnit,
                CollisionBox::sensor(Vec3::new(0.4, 0.2, 0.4)),
                PulseAnim::start(),
            ))
            .id();

        let mut peaked = false;
        for _ in 0..20 {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_millis(50));
            app.update();
            let scale = app.world().get::<Transform>(cash).unwrap().scale;
            peaked |= scale.x > 1.0;
        }

        // the pulse actually grew, ran to completion, and was removed
        assert!(peaked);
        assert!(app.world().get::<PulseAnim>(cash).is_none());
        // completion path forced the scale back to the captured default
        assert_eq!(
            app.world().get::<Transform>(cash).unwrap().scale,
            Vec3::ONE
        );
    }

    #[test]
    fn layout_tick_lines_the_queue_up_behind_the_runner() {
        let mut app = test_app();
        spawn_player_at(&mut app, Vec3::new(0.0, 1.0, 5.0));

        let mut riders = Vec::new();
        for i in 0..3 {
            let cash = spawn_cash_at(&mut app, Vec3::new(1.0, 0.0, 20.0 + i as f32));
            app.world_mut().get_mut::<CollisionBox>(cash).unwrap().trigger = true;
            app.world_mut().resource_mut::<CashStack>().push(cash);
            riders.push(cash);
        }

        app.update();

        // newest rider front-most, one unit_depth apart, all at stack height
        let z: Vec<f32> = riders
            .iter()
            .map(|&e| app.world().get::<Transform>(e).unwrap().translation.z)
            .collect();
        assert!((z[2] - 8.0).abs() < 1e-5);
        assert!((z[1] - 7.0).abs() < 1e-5);
        assert!((z[0] - 6.0).abs() < 1e-5);
        for &e in &riders {
            assert_eq!(app.world().get::<Transform>(e).unwrap().translation.y, 0.75);
        }
    }
}
