//! Scene setup system

use bevy::prelude::*;

use crate::engine::components::DragRotator;
use crate::engine::resources::RotatorSettingsRes;

/// Spawn the rotator target driven by the headless app
pub fn setup_scene(mut commands: Commands, settings: Res<RotatorSettingsRes>) {
    commands.spawn((
        Name::new("Rotator"),
        Transform::IDENTITY,
        DragRotator::new(settings.0.clone()),
    ));
    info!("[DragRotator] Scene setup complete");
}
