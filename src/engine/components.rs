//! Bevy component definitions
//!
//! This module contains the drag rotator itself, the reset button binding
//! and the in-flight reset animation.

use bevy::prelude::*;

use crate::config::RotatorSettings;
use crate::engine::resources::InputFrame;
use crate::input::{DragTracker, InputMode};
use crate::rotation::{pitch_readout, VerticalTracker};
use crate::tween::RotationTween;

/// Rotates its entity's `Transform` in response to pointer or touch drags
///
/// Holds the rotator's configuration together with its drag and
/// vertical-angle tracking state.
#[derive(Component, Debug, Clone)]
#[require(Transform)]
pub struct DragRotator {
    settings: RotatorSettings,
    reset_button: Option<Entity>,
    drag: DragTracker,
    vertical: VerticalTracker,
}

impl DragRotator {
    pub fn new(settings: RotatorSettings) -> Self {
        Self {
            settings,
            reset_button: None,
            drag: DragTracker::default(),
            vertical: VerticalTracker::default(),
        }
    }

    /// Bind a UI button whose clicks reset this rotator
    ///
    /// The button entity must exist by the time the rotator is initialized.
    pub fn with_reset_button(mut self, button: Entity) -> Self {
        self.reset_button = Some(button);
        self
    }

    pub fn settings(&self) -> &RotatorSettings {
        &self.settings
    }

    pub fn reset_button(&self) -> Option<Entity> {
        self.reset_button
    }

    pub fn rotation_speed(&self) -> f32 {
        self.settings.rotation_speed
    }

    /// Any value is accepted, including zero and negative gains
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.settings.rotation_speed = speed;
    }

    pub fn is_rotating(&self) -> bool {
        self.drag.is_rotating()
    }

    pub fn current_vertical_rotation(&self) -> f32 {
        self.vertical.current
    }

    pub fn last_pointer_position(&self) -> Vec2 {
        self.drag.last_pointer_position()
    }

    /// Feed one tick of input, returning the drag delta if one should rotate
    pub fn track(&mut self, mode: InputMode, frame: &InputFrame) -> Option<Vec2> {
        match mode {
            InputMode::Pointer => self.drag.track_mouse(&frame.mouse),
            InputMode::Touch => self.drag.track_touches(&frame.touches),
        }
    }

    /// Rotate `transform` by a screen-space drag delta
    pub fn rotate(&mut self, delta: Vec2, transform: &mut Transform) {
        let increment = self
            .vertical
            .step(&self.settings, delta, pitch_readout(transform.rotation));
        increment.apply(&self.settings, transform);
    }

    /// Final step of a reset animation
    pub fn finish_reset(&mut self) {
        self.vertical.reset();
    }
}

/// Marks a UI button whose clicks reset rotators
///
/// Every rotator naming the button is added when it is initialized and
/// removed on teardown. The component goes away with the last one.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ResetButton {
    targets: Vec<Entity>,
}

impl ResetButton {
    pub fn new(target: Entity) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Rotators reset by a click, in binding order
    pub fn targets(&self) -> &[Entity] {
        &self.targets
    }

    pub fn bind(&mut self, target: Entity) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    /// Drop `target`, returning whether any rotator is still bound
    pub fn unbind(&mut self, target: Entity) -> bool {
        self.targets.retain(|&bound| bound != target);
        !self.targets.is_empty()
    }
}

/// Reset-to-identity animation in flight on a rotator
#[derive(Component, Debug, Clone)]
pub struct RotationReset(pub RotationTween);
