//! Shared state structures for feeding input from a host thread
//!
//! A host that owns the real event loop (a webview, an editor shell)
//! writes pointer, touch and reset-click state here; the Bevy side
//! consumes it once per tick.

use std::sync::{Arc, Mutex};

use crate::input::{MouseSample, TouchSample, TouchStage};

/// Input accumulated by the host since Bevy last consumed it
#[derive(Clone, Debug, Default)]
pub struct HostInput {
    /// Latest mouse state; press/release edges accumulate until consumed
    pub mouse: MouseSample,
    /// Touches currently down, plus those that ended since the last tick
    pub touches: Vec<TouchSample>,
    /// Reset clicks not yet delivered
    pub reset_requests: u32,
}

/// One tick's worth of host input
#[derive(Clone, Debug, Default)]
pub struct HostFrame {
    pub mouse: MouseSample,
    pub touches: Vec<TouchSample>,
    pub reset_requests: u32,
}

impl HostInput {
    /// Take the pending frame, clearing everything that must only be seen once
    ///
    /// Edges and reset clicks are cleared, ended touches dropped and the
    /// rest left stationary until the host reports new movement.
    pub fn take_frame(&mut self) -> HostFrame {
        let frame = HostFrame {
            mouse: self.mouse,
            touches: self.touches.clone(),
            reset_requests: self.reset_requests,
        };

        self.mouse.just_pressed = false;
        self.mouse.just_released = false;
        self.touches
            .retain(|touch| !matches!(touch.stage, TouchStage::Ended | TouchStage::Canceled));
        for touch in &mut self.touches {
            touch.stage = TouchStage::Stationary;
        }
        self.reset_requests = 0;

        frame
    }
}

/// Thread-safe host input shared between the host and Bevy
#[derive(Clone, Default)]
pub struct SharedHostInput(pub Arc<Mutex<HostInput>>);
