// src/stack/mod.rs
//! The stack core: ordered LIFO of collected cash units, per-tick queue
//! layout, player-hitbox growth, trap-triggered bulk removal, and the
//! pulse feedback animation.

mod collider;
mod components;
mod layout;
mod plugin;
mod store;
mod systems;
mod tuning;

// re-export only what the other plugins actually consume
pub use collider::PlayerCollider;
pub use components::{CashUnit, CollisionBox};
pub use plugin::CashStackPlugin;
