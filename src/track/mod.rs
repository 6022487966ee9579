// src/track/mod.rs

mod components;
mod plugin;
mod systems;

pub use components::Trap;
pub use plugin::TrackPlugin;
