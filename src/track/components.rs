use bevy::prelude::*;

/// Hazard gate across the lane. Any stacked unit that sweeps through it is
/// surrendered, together with everything collected after it.
#[derive(Component)]
pub struct Trap;
