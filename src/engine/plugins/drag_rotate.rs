//! Drag rotation plugin
//!
//! Registers the rotator's messages, resources and systems. Everything
//! runs in `Update`, ordered bind -> sample -> drag -> reset -> release.

use bevy::prelude::*;

use crate::engine::messages::ResetRotation;
use crate::engine::resources::{
    ActiveInputMode, InputFrame, ResetSubscriptions, SharedHostInputRes,
};
use crate::engine::systems::*;
use crate::input::InputMode;

/// Ordering of the rotator systems within `Update`
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotatorSystems {
    /// Initialize newly added rotators
    Bind,
    /// Fill the `InputFrame`
    Sample,
    /// Apply drag rotation
    Drag,
    /// Start and advance reset animations
    Reset,
    /// Tear down removed rotators
    Release,
}

/// Adds drag-to-rotate behavior for every `DragRotator` entity
#[derive(Default)]
pub struct DragRotatePlugin {
    /// Device kind to follow; defaults to the compile target's
    pub input_mode: Option<InputMode>,
}

impl DragRotatePlugin {
    pub fn with_input_mode(input_mode: InputMode) -> Self {
        Self {
            input_mode: Some(input_mode),
        }
    }
}

impl Plugin for DragRotatePlugin {
    fn build(&self, app: &mut App) {
        let mode = self.input_mode.unwrap_or_else(InputMode::for_target);

        app.add_message::<ResetRotation>()
            .insert_resource(ActiveInputMode(mode))
            .init_resource::<InputFrame>()
            .init_resource::<ResetSubscriptions>();

        app.configure_sets(
            Update,
            (
                RotatorSystems::Bind,
                RotatorSystems::Sample,
                RotatorSystems::Drag,
                RotatorSystems::Reset,
                RotatorSystems::Release,
            )
                .chain(),
        );

        app.add_systems(Update, bind_reset_buttons.in_set(RotatorSystems::Bind));
        app.add_systems(
            Update,
            (
                sample_native_input.run_if(not(resource_exists::<SharedHostInputRes>)),
                pull_host_input.run_if(resource_exists::<SharedHostInputRes>),
            )
                .in_set(RotatorSystems::Sample),
        );
        app.add_systems(Update, drag_rotate.in_set(RotatorSystems::Drag));
        app.add_systems(
            Update,
            (emit_reset_on_click, start_reset, advance_reset)
                .chain()
                .in_set(RotatorSystems::Reset),
        );
        app.add_systems(Update, release_reset_buttons.in_set(RotatorSystems::Release));

        info!("[DragRotator] Plugin configured ({:?} input)", mode);
    }
}
