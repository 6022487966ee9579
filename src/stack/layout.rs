// src/stack/layout.rs
//! Per-tick queue layout: absolute forward slots plus cascading lateral
//! convergence toward the runner's lane position.

use bevy::prelude::*;

use crate::stack::tuning::StackTuning;

/// Repositions every stacked unit relative to the agent. `positions[0]` is
/// the top (newest) unit, which rides at the front of the queue.
///
/// Forward (Z) and height (Y) are assigned absolutely, so re-running the pass
/// in the same frame is harmless. Lateral (X) only converges: the divisor
/// shrinks toward the back of the queue, so the oldest unit (node 1, nearest
/// the runner) catches up fastest and the queue whips through turns
/// back-to-front.
pub fn advance_layout(agent_pos: Vec3, dt: f32, tuning: &StackTuning, positions: &mut [Vec3]) {
    let mut budget = positions.len() as f32 * tuning.unit_depth;
    let mut node = positions.len();

    for pos in positions.iter_mut() {
        pos.z = agent_pos.z + budget;
        pos.y = tuning.stack_height;

        let diff_x = agent_pos.x - pos.x;
        pos.x += (dt * tuning.convergence * diff_x) / (node as f32 * tuning.node_scale);

        budget -= tuning.unit_depth;
        node -= 1;
    }
}

/// Where a freshly collected unit materializes, computed *before* the push:
/// level with the current top (or with the agent itself when the stack is
/// empty), at the pre-push forward budget. The immediate layout pass that
/// follows the push slides it into its real slot.
pub fn entrance_position(
    agent_pos: Vec3,
    top_pos: Option<Vec3>,
    stack_len: usize,
    tuning: &StackTuning,
) -> Vec3 {
    let x = top_pos.map_or(agent_pos.x, |p| p.x);
    Vec3::new(
        x,
        tuning.stack_height,
        agent_pos.z + stack_len as f32 * tuning.unit_depth,
    )
}
