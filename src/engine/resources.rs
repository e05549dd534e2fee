//! Bevy resource definitions
//!
//! This module contains all global resources used by the rotator systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::config::RotatorSettings;
use crate::host_bridge::shared_state::SharedHostInput;
use crate::input::{InputMode, MouseSample, TouchSample};

// =============================================================================
// Input
// =============================================================================

/// Device kind that drives every rotator, fixed when the plugin is built
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct ActiveInputMode(pub InputMode);

/// Device state for the current tick
///
/// Rewritten every tick by the sampling systems. Hosts feeding input by
/// hand must also rewrite it every tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputFrame {
    pub mouse: MouseSample,
    /// Touches active this tick, including ones that ended this tick
    pub touches: Vec<TouchSample>,
}

/// Shared host input resource for Bevy
#[derive(Resource, Clone)]
pub struct SharedHostInputRes(pub SharedHostInput);

// =============================================================================
// Reset Buttons
// =============================================================================

/// Rotator -> bound reset button, released exactly once on teardown
#[derive(Resource, Debug, Default)]
pub struct ResetSubscriptions(pub HashMap<Entity, Entity>);

// =============================================================================
// Headless App
// =============================================================================

/// Settings used to spawn the headless app's rotator
#[derive(Resource, Debug, Clone)]
pub struct RotatorSettingsRes(pub RotatorSettings);
