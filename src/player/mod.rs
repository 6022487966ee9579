// src/player/mod.rs

// these sub-modules stay private
mod components;
mod plugin;
mod systems;

// re-export what the stack core and track need:
pub use components::Player;
pub use plugin::PlayerPlugin;
