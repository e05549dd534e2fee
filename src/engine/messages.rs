//! Bevy message definitions

use bevy::prelude::*;

/// Request to animate a rotator back to identity
///
/// Written once per button click, or once per host reset request for
/// every rotator.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetRotation {
    pub target: Entity,
}
