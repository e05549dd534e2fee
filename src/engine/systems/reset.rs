//! Reset animation systems
//!
//! Button clicks become `ResetRotation` messages, which start an eased
//! tween back to identity. The tracked vertical angle is cleared only once
//! the tween completes.

use bevy::{platform::collections::HashSet, prelude::*, time::Time};

use crate::engine::components::{DragRotator, ResetButton, RotationReset};
use crate::engine::messages::ResetRotation;
use crate::tween::RotationTween;

/// Emit a reset request for every rotator bound to a clicked button
///
/// A click is a press followed by a release over the button, which Bevy
/// reports as `Pressed` then `Hovered`. Releasing elsewhere goes through
/// `None` and cancels it.
pub fn emit_reset_on_click(
    buttons: Query<(Entity, &Interaction, &ResetButton), Changed<Interaction>>,
    mut armed: Local<HashSet<Entity>>,
    mut resets: MessageWriter<ResetRotation>,
) {
    for (entity, interaction, button) in buttons.iter() {
        match interaction {
            Interaction::Pressed => {
                armed.insert(entity);
            }
            Interaction::Hovered => {
                if armed.remove(&entity) {
                    resets.write_batch(
                        button
                            .targets()
                            .iter()
                            .map(|&target| ResetRotation { target }),
                    );
                }
            }
            Interaction::None => {
                armed.remove(&entity);
            }
        }
    }
}

/// Start a reset tween for each request
///
/// A request for a rotator that is already resetting is rejected.
pub fn start_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetRotation>,
    rotators: Query<(&DragRotator, &Transform, Has<RotationReset>)>,
) {
    let mut started: HashSet<Entity> = HashSet::default();

    for request in resets.read() {
        let Ok((rotator, transform, resetting)) = rotators.get(request.target) else {
            debug!("[DragRotator] Reset requested for {:?}, which is not a rotator", request.target);
            continue;
        };
        if resetting || !started.insert(request.target) {
            debug!("[DragRotator] Reset already in flight for {:?}, ignoring", request.target);
            continue;
        }

        let duration = rotator.settings().reset_duration;
        commands
            .entity(request.target)
            .insert(RotationReset(RotationTween::to_identity(transform.rotation, duration)));
        debug!("[DragRotator] Resetting {:?} over {:.2}s", request.target, duration);
    }
}

/// Advance in-flight reset tweens and finish the ones that complete
pub fn advance_reset(
    mut commands: Commands,
    time: Res<Time>,
    mut resetting: Query<(Entity, &mut DragRotator, &mut Transform, &mut RotationReset)>,
) {
    let dt = time.delta_secs();
    for (entity, mut rotator, mut transform, mut reset) in resetting.iter_mut() {
        let step = reset.0.advance(dt);
        transform.rotation = step.rotation;

        if step.finished {
            rotator.finish_reset();
            commands.entity(entity).remove::<RotationReset>();
            info!("[DragRotator] Reset complete for {:?}", entity);
        }
    }
}
