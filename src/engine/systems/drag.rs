//! Drag rotation system

use bevy::prelude::*;

use crate::engine::components::{DragRotator, RotationReset};
use crate::engine::resources::{ActiveInputMode, InputFrame};

/// Rotate every drag rotator by this tick's pointer or touch delta
///
/// Drags are still tracked while a reset animation runs, but the
/// animation owns the orientation until it completes.
pub fn drag_rotate(
    mode: Res<ActiveInputMode>,
    frame: Res<InputFrame>,
    mut rotators: Query<(&mut DragRotator, &mut Transform, Has<RotationReset>)>,
) {
    for (mut rotator, mut transform, resetting) in rotators.iter_mut() {
        let Some(delta) = rotator.track(mode.0, &frame) else {
            continue;
        };
        if resetting {
            continue;
        }
        rotator.rotate(delta, &mut transform);
    }
}
