// src/stack/components.rs

use bevy::prelude::*;

/// A collectible cash unit. Spawned and owned by the world; the stack only
/// ever borrows it by entity id.
#[derive(Component)]
pub struct CashUnit;

/// Hand-rolled box collider. `trigger` boxes overlap without blocking; a
/// unit's box flips to trigger the moment it joins the stack so it stops
/// impeding the runner.
#[derive(Component, Clone, Copy, Debug)]
pub struct CollisionBox {
    pub half_extents: Vec3,
    pub trigger: bool,
}

impl CollisionBox {
    pub fn solid(half_extents: Vec3) -> Self {
        Self { half_extents, trigger: false }
    }

    pub fn sensor(half_extents: Vec3) -> Self {
        Self { half_extents, trigger: true }
    }
}

/// World-space AABB overlap test between two centered boxes.
pub fn aabb_overlap(a_center: Vec3, a_half: Vec3, b_center: Vec3, b_half: Vec3) -> bool {
    (a_center.x - b_center.x).abs() <= a_half.x + b_half.x
        && (a_center.y - b_center.y).abs() <= a_half.y + b_half.y
        && (a_center.z - b_center.z).abs() <= a_half.z + b_half.z
}

/// Scale pulse played on every aggregation event: grow on X/Z for one phase
/// duration, shrink for another, then snap back to the captured default
/// scale. Re-inserting the component restarts it.
#[derive(Component, Clone, Copy, Debug)]
pub struct PulseAnim {
    elapsed: f32,
    shrinking: bool,
}

impl PulseAnim {
    pub fn start() -> Self {
        Self { elapsed: 0.0, shrinking: false }
    }

    /// Steps the animation one frame. Returns `true` once finished; the
    /// caller performs the final forced reset to the default scale, which
    /// guards against drift from uneven frame timing.
    pub fn advance(&mut self, dt: f32, phase_duration: f32, scale: &mut Vec3) -> bool {
        let step = Vec3::new(dt, 0.0, dt);
        self.elapsed += dt;

        if !self.shrinking {
            *scale += step;
            if self.elapsed >= phase_duration {
                self.shrinking = true;
                self.elapsed = 0.0;
            }
            false
        } else {
            *scale -= step;
            self.elapsed >= phase_duration
        }
    }
}

/// Local scale of the first unit ever collected; every finished pulse resets
/// to this. Captured lazily, immutable afterwards.
#[derive(Resource, Default)]
pub struct DefaultUnitScale(pub Option<Vec3>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_are_detected() {
        assert!(aabb_overlap(
            Vec3::ZERO,
            Vec3::splat(0.5),
            Vec3::new(0.7, 0.0, 0.0),
            Vec3::splat(0.5),
        ));
        assert!(!aabb_overlap(
            Vec3::ZERO,
            Vec3::splat(0.5),
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::splat(0.4),
        ));
    }

    #[test]
    fn pulse_runs_two_phases_then_reports_done() {
        let mut pulse = PulseAnim::start();
        let mut scale = Vec3::ONE;
        let dt = 0.05;

        let mut frames = 0;
        while !pulse.advance(dt, 0.2, &mut scale) {
            frames += 1;
            assert!(frames < 100, "pulse never finished");
        }
        assert_eq!(frames + 1, 8); // 4 grow + 4 shrink frames at 0.05s
    }

    #[test]
    fn uneven_frames_drift_the_scale_until_the_forced_reset() {
        let default = Vec3::ONE;
        let mut pulse = PulseAnim::start();
        let mut scale = default;

        // deliberately ragged frame times
        let mut done = false;
        for dt in [0.03, 0.07, 0.011, 0.09, 0.05, 0.06, 0.08, 0.1, 0.1] {
            if pulse.advance(dt, 0.2, &mut scale) {
                done = true;
                break;
            }
        }
        assert!(done);
        // the raw stepping does not land back on the default; the animation
        // system's completion snap is what restores it exactly
        assert_ne!(scale, default);
    }

    #[test]
    fn restart_resets_the_phase() {
        let mut pulse = PulseAnim::start();
        let mut scale = Vec3::ONE;
        for _ in 0..5 {
            pulse.advance(0.05, 0.2, &mut scale);
        }
        assert!(pulse.shrinking);

        pulse = PulseAnim::start();
        assert!(!pulse.shrinking);
        assert_eq!(pulse.elapsed, 0.0);
    }

    #[test]
    fn pulse_only_touches_x_and_z() {
        let mut pulse = PulseAnim::start();
        let mut scale = Vec3::ONE;
        pulse.advance(0.1, 0.2, &mut scale);
        assert_eq!(scale.y, 1.0);
        assert!(scale.x > 1.0 && scale.z > 1.0);
    }
}
