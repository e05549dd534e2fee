//! Host command handlers
//!
//! Functions a host calls from its own thread to drive the rotator.

use bevy::math::Vec2;

use super::shared_state::SharedHostInput;
use crate::error::RotatorError;
use crate::input::{TouchSample, TouchStage};

/// Report the cursor position and primary button state
///
/// Press and release edges accumulate until Bevy consumes them.
pub fn send_mouse_input(
    state: &SharedHostInput,
    x: f32,
    y: f32,
    left_button: bool,
) -> Result<(), RotatorError> {
    let mut guard = state.0.lock().map_err(|_| RotatorError::InputPoisoned)?;
    let mouse = &mut guard.mouse;

    if left_button && !mouse.pressed {
        mouse.just_pressed = true;
    } else if !left_button && mouse.pressed {
        mouse.just_released = true;
    }
    mouse.pressed = left_button;
    mouse.position = Some(Vec2::new(x, y));
    Ok(())
}

/// Report the touches currently on screen
///
/// A touch that began or ended since the last tick keeps that stage
/// until consumed, even if the host reports it again as moved.
pub fn send_touches(state: &SharedHostInput, touches: Vec<TouchSample>) -> Result<(), RotatorError> {
    let mut guard = state.0.lock().map_err(|_| RotatorError::InputPoisoned)?;

    let merged = touches
        .into_iter()
        .enumerate()
        .map(|(i, mut touch)| {
            let pending = guard.touches.get(i).map(|t| t.stage);
            if pending == Some(TouchStage::Began)
                && matches!(touch.stage, TouchStage::Moved | TouchStage::Stationary)
            {
                touch.stage = TouchStage::Began;
            }
            touch
        })
        .collect();
    guard.touches = merged;
    Ok(())
}

/// Queue one reset click
pub fn request_reset(state: &SharedHostInput) -> Result<(), RotatorError> {
    let mut guard = state.0.lock().map_err(|_| RotatorError::InputPoisoned)?;
    guard.reset_requests += 1;
    Ok(())
}
