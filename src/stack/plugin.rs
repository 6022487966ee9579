// src/stack/plugin.rs
//! Wiring for the stack core:
//! - tuning asset + loader
//! - contact events
//! - the per-frame schedule (detect -> mutate -> layout -> pulse)

use bevy::prelude::*;

use crate::state::GameState;

use crate::stack::components::DefaultUnitScale;
use crate::stack::store::CashStack;
use crate::stack::systems::{
    animate_pulses, detect_cash_contacts, detect_trap_contacts, drive_stack_layout,
    process_cash_pickups, process_trap_hits,
};
use crate::stack::tuning::{StackTuning, StackTuningHandle, StackTuningLoader};

/// Fired when the runner's hitbox touches a loose cash unit.
#[derive(Event, Clone, Copy)]
pub struct CashContact(pub Entity);

/// Fired when a trap gate touches a stacked unit; carries that exact unit.
#[derive(Event, Clone, Copy)]
pub struct TrapContact(pub Entity);

pub struct CashStackPlugin;

impl Plugin for CashStackPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<StackTuning>()
            .register_asset_loader(StackTuningLoader)
            .init_resource::<StackTuning>()
            .init_resource::<StackTuningHandle>()
            .init_resource::<CashStack>()
            .init_resource::<DefaultUnitScale>()
            .add_event::<CashContact>()
            .add_event::<TrapContact>()
            .add_systems(Startup, load_tuning)
            .add_systems(Update, apply_tuning_when_ready)
            .add_systems(
                Update,
                (
                    detect_cash_contacts,
                    process_cash_pickups.after(detect_cash_contacts),
                    detect_trap_contacts.after(process_cash_pickups),
                    process_trap_hits.after(detect_trap_contacts),
                    drive_stack_layout.after(process_trap_hits),
                    animate_pulses.after(drive_stack_layout),
                )
                    .run_if(in_state(GameState::Running)),
            );
    }
}

/// Startup: request the tuning manifest, store the handle.
fn load_tuning(mut handle: ResMut<StackTuningHandle>, assets: Res<AssetServer>) {
    if handle.0.is_strong() {
        return;
    }
    handle.0 = assets.load("tuning/cash_stack.tuning.ron");
    info!("Stack: loading tuning from 'tuning/cash_stack.tuning.ron'");
}

/// Update: copy the asset over the live resource once it arrives.
fn apply_tuning_when_ready(
    handle: Res<StackTuningHandle>,
    assets: Res<Assets<StackTuning>>,
    mut tuning: ResMut<StackTuning>,
    mut applied: Local<bool>,
) {
    if *applied {
        return;
    }
    if let Some(loaded) = assets.get(&handle.0) {
        *tuning = *loaded;
        *applied = true;
        info!("Stack: tuning loaded and applied");
    }
}
