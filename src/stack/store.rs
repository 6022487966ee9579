// src/stack/store.rs
//! Ordered LIFO record of the cash units currently riding the player.

use bevy::prelude::*;

/// Top of the stack is the most recently collected unit (back of the `Vec`).
/// The stack never owns the entities; spawning and despawning stay with the
/// world.
#[derive(Resource, Default, Debug)]
pub struct CashStack {
    units: Vec<Entity>,
}

impl CashStack {
    /// Appends `unit` as the new top. The caller guarantees `unit` is not
    /// already present.
    pub fn push(&mut self, unit: Entity) {
        self.units.push(unit);
    }

    /// Removes units from the top down to and including `target`, returning
    /// them most-recent-first. A `target` that is not on the stack removes
    /// nothing and yields an empty vec.
    pub fn pop_until_inclusive(&mut self, target: Entity) -> Vec<Entity> {
        let mut depth = 0;
        let mut found = false;
        for &unit in self.units.iter().rev() {
            depth += 1;
            if unit == target {
                found = true;
                break;
            }
        }
        if !found {
            return Vec::new();
        }

        let mut removed = Vec::with_capacity(depth);
        for _ in 0..depth {
            if let Some(unit) = self.units.pop() {
                removed.push(unit);
            }
        }
        removed
    }

    pub fn peek_top(&self) -> Option<Entity> {
        self.units.last().copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterates top (newest) to bottom (oldest).
    pub fn iter_top_down(&self) -> impl Iterator<Item = Entity> + '_ {
        self.units.iter().rev().copied()
    }
}
