// src/stack/tuning.rs
//! Data-driven stack tuning + loader for `.tuning.ron` files.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning constants for the cash stack. Lives as a plain resource so the
/// game runs on defaults immediately; values from the `.tuning.ron` asset
/// overwrite it once loaded.
#[derive(Resource, Asset, TypePath, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StackTuning {
    /// Forward size of one unit: slot spacing and collider extension.
    #[serde(default = "default_unit_depth")]
    pub unit_depth: f32,

    /// Fixed height the queue rides at.
    #[serde(default = "default_stack_height")]
    pub stack_height: f32,

    /// Lateral convergence gain.
    #[serde(default = "default_convergence")]
    pub convergence: f32,

    /// Scale applied to the node index in the convergence divisor.
    #[serde(default = "default_node_scale")]
    pub node_scale: f32,

    /// Seconds per pulse phase (grow, then shrink).
    #[serde(default = "default_pulse_duration")]
    pub pulse_duration: f32,
}

fn default_unit_depth() -> f32 {
    1.0
}
fn default_stack_height() -> f32 {
    0.75
}
fn default_convergence() -> f32 {
    20.0
}
fn default_node_scale() -> f32 {
    0.1
}
fn default_pulse_duration() -> f32 {
    0.2
}

impl Default for StackTuning {
    fn default() -> Self {
        Self {
            unit_depth: default_unit_depth(),
            stack_height: default_stack_height(),
            convergence: default_convergence(),
            node_scale: default_node_scale(),
            pulse_duration: default_pulse_duration(),
        }
    }
}

/// Handle to the tuning asset while it loads.
#[derive(Resource, Default)]
pub struct StackTuningHandle(pub Handle<StackTuning>);

// ---------- Asset loader for `.tuning.ron` ----------

#[derive(Default)]
pub struct StackTuningLoader;

#[derive(thiserror::Error, Debug)]
pub enum StackTuningLoadError {
    #[error("I/O while reading tuning: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}

impl AssetLoader for StackTuningLoader {
    type Asset = StackTuning;
    type Settings = ();
    type Error = StackTuningLoadError;

    fn extensions(&self) -> &[&str] {
        &["tuning.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        ron::de::from_bytes(&bytes).map_err(|e| StackTuningLoadError::Ron(e.to_string()))
    }
}
