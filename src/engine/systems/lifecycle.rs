//! Rotator lifecycle systems
//!
//! Initialization binds a rotator's reset button; teardown releases it.

use bevy::prelude::*;

use crate::engine::components::{DragRotator, ResetButton, RotationReset};
use crate::engine::resources::ResetSubscriptions;
use crate::error::RotatorError;

/// Bind reset buttons for newly added rotators
///
/// A rotator naming a button entity that does not exist is a fatal
/// configuration error.
pub fn bind_reset_buttons(
    mut commands: Commands,
    added: Query<(Entity, &DragRotator), Added<DragRotator>>,
    mut subscriptions: ResMut<ResetSubscriptions>,
) -> Result {
    for (rotator, drag) in added.iter() {
        let settings = drag.settings();
        if !settings.has_ordered_bounds() {
            warn!(
                "[DragRotator] {:?} has min vertical angle {} above max {}; rotation will saturate",
                rotator, settings.min_vertical_angle, settings.max_vertical_angle
            );
        }

        let Some(button) = drag.reset_button() else {
            continue;
        };
        commands
            .get_entity(button)
            .map_err(|_| RotatorError::MissingResetButton { rotator, button })?
            .entry::<ResetButton>()
            .and_modify(move |mut bound| bound.bind(rotator))
            .or_insert(ResetButton::new(rotator));
        subscriptions.0.insert(rotator, button);
        info!("[DragRotator] Reset button {:?} bound to {:?}", button, rotator);
    }
    Ok(())
}

/// Release reset buttons of removed rotators and drop their reset tweens
pub fn release_reset_buttons(
    mut commands: Commands,
    mut removed: RemovedComponents<DragRotator>,
    mut subscriptions: ResMut<ResetSubscriptions>,
    mut buttons: Query<&mut ResetButton>,
) {
    for rotator in removed.read() {
        if let Ok(mut entity) = commands.get_entity(rotator) {
            entity.try_remove::<RotationReset>();
        }

        let Some(button) = subscriptions.0.remove(&rotator) else {
            continue;
        };
        // Other rotators sharing the button stay bound
        if let Ok(mut bound) = buttons.get_mut(button) {
            if !bound.unbind(rotator) {
                commands.entity(button).try_remove::<ResetButton>();
            }
        }
        debug!("[DragRotator] Released reset button {:?} of {:?}", button, rotator);
    }
}
