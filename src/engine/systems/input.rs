//! Input sampling systems
//!
//! This module fills the per-tick `InputFrame`, either from Bevy's own
//! mouse, window and touch state or from the shared host bridge.

use bevy::{
    input::touch::Touches,
    prelude::*,
    window::PrimaryWindow,
};

use crate::engine::components::DragRotator;
use crate::engine::messages::ResetRotation;
use crate::engine::resources::{ActiveInputMode, InputFrame, SharedHostInputRes};
use crate::input::{InputMode, MouseSample, TouchSample, TouchStage};

/// Sample the primary mouse button and cursor, or the touch screen
///
/// Missing input resources leave the frame untouched so a host can feed
/// it directly.
pub fn sample_native_input(
    mode: Res<ActiveInputMode>,
    mouse_buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut frame: ResMut<InputFrame>,
) {
    match mode.0 {
        InputMode::Pointer => {
            let Some(buttons) = mouse_buttons else {
                return;
            };
            frame.mouse = MouseSample {
                just_pressed: buttons.just_pressed(MouseButton::Left),
                just_released: buttons.just_released(MouseButton::Left),
                pressed: buttons.pressed(MouseButton::Left),
                position: windows.single().ok().and_then(Window::cursor_position),
            };
        }
        InputMode::Touch => {
            let Some(touches) = touches else {
                return;
            };
            frame.touches = collect_touches(&touches);
        }
    }
}

/// Flatten Bevy's touch tracking into per-touch stages for this tick
fn collect_touches(touches: &Touches) -> Vec<TouchSample> {
    let held = touches.iter().map(|touch| {
        let stage = if touches.just_pressed(touch.id()) {
            TouchStage::Began
        } else if touch.delta() != Vec2::ZERO {
            TouchStage::Moved
        } else {
            TouchStage::Stationary
        };
        TouchSample {
            stage,
            position: touch.position(),
        }
    });
    let ended = touches.iter_just_released().map(|touch| TouchSample {
        stage: TouchStage::Ended,
        position: touch.position(),
    });
    let canceled = touches.iter_just_canceled().map(|touch| TouchSample {
        stage: TouchStage::Canceled,
        position: touch.position(),
    });

    held.chain(ended).chain(canceled).collect()
}

/// Copy host-fed input into the frame and turn queued clicks into resets
pub fn pull_host_input(
    shared: Res<SharedHostInputRes>,
    rotators: Query<Entity, With<DragRotator>>,
    mut frame: ResMut<InputFrame>,
    mut resets: MessageWriter<ResetRotation>,
) {
    // Read and clear consumed edges
    let host = {
        let mut guard = match shared.0 .0.lock() {
            Ok(g) => g,
            Err(_) => {
                warn!("[DragRotator] Host input lock poisoned, skipping tick");
                return;
            }
        };
        guard.take_frame()
    };

    frame.mouse = host.mouse;
    frame.touches = host.touches;

    for _ in 0..host.reset_requests {
        for target in rotators.iter() {
            resets.write(ResetRotation { target });
        }
    }
}
