// src/stack/collider.rs
//! Player hitbox that stretches forward as the stack grows, so the front of
//! the queue can pick up cash before the runner itself reaches it.

use bevy::prelude::*;

/// Box collider carried by the player. `base_*` is captured at construction
/// and never changes; `grow`/`shrink` keep the live geometry at exactly
/// `base + stack_len * unit_depth` on the forward axis.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct PlayerCollider {
    pub base_size: Vec3,
    pub base_center: Vec3,
    pub base_offset: Vec3,
    pub size: Vec3,
    pub center: Vec3,
    pub offset: Vec3,
}

impl PlayerCollider {
    pub fn new(size: Vec3, center: Vec3, offset: Vec3) -> Self {
        Self {
            base_size: size,
            base_center: center,
            base_offset: offset,
            size,
            center,
            offset,
        }
    }

    /// Called exactly once per collected unit: move the box forward one slot,
    /// lengthen it, and re-center over the new extent.
    pub fn grow(&mut self, unit_depth: f32) {
        self.offset.z += unit_depth;
        self.size.z += unit_depth;
        self.center.z += unit_depth * 0.5;
    }

    /// Exact inverse of [`grow`](Self::grow); called once per popped unit.
    pub fn shrink(&mut self, unit_depth: f32) {
        self.offset.z -= unit_depth;
        self.size.z -= unit_depth;
        self.center.z -= unit_depth * 0.5;
    }

    /// World-space center of the box for a player at `player_pos`.
    pub fn world_center(&self, player_pos: Vec3) -> Vec3 {
        player_pos + self.offset + self.center
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}
