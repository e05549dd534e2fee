//! Drag-to-rotation math
//!
//! Converts screen-space pointer deltas into world-space pitch/yaw
//! increments. The vertical angle is tracked separately from the
//! transform's Euler readout, which wraps at 360 degrees and cannot be
//! clamped directly.

use bevy::math::{EulerRot, Quat, Vec2};
use bevy::transform::components::Transform;

use crate::config::RotatorSettings;

/// World-space rotation to apply for one drag step (degrees)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationIncrement {
    /// Rotation about the world X axis
    pub pitch: f32,
    /// Rotation about the world Y axis
    pub yaw: f32,
}

impl RotationIncrement {
    /// Delta quaternion, yaw applied after pitch, no roll
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Rotate `transform` by this increment in world space
    pub fn apply_world(self, transform: &mut Transform) {
        transform.rotation = (self.to_quat() * transform.rotation).normalize();
    }

    /// Add this increment to the YXZ Euler angles of `transform`
    ///
    /// World-space yaw composes the same way, but pitch lands exactly on
    /// `readout + pitch` whatever the current yaw. A world X rotation would
    /// tilt the opposite way once the object faces backwards.
    pub fn apply_euler(self, transform: &mut Transform) {
        let (yaw, pitch, roll) = transform.rotation.to_euler(EulerRot::YXZ);
        transform.rotation = Quat::from_euler(
            EulerRot::YXZ,
            yaw + self.yaw.to_radians(),
            pitch + self.pitch.to_radians(),
            roll,
        )
        .normalize();
    }

    /// Apply the way `settings` requires
    ///
    /// A clamped vertical angle needs the pitch readout to follow the
    /// tracked angle exactly, so it goes through the Euler angles.
    pub fn apply(self, settings: &RotatorSettings, transform: &mut Transform) {
        if settings.limit_vertical_rotation {
            self.apply_euler(transform);
        } else {
            self.apply_world(transform);
        }
    }
}

/// Raw vertical and horizontal rotation for a pointer delta, inversion applied
///
/// Returns `(rotation_x, rotation_y)`: vertical drag drives `rotation_x`,
/// horizontal drag drives `rotation_y`.
pub fn raw_rotation(settings: &RotatorSettings, delta: Vec2) -> (f32, f32) {
    let mut rotation_x = delta.y * settings.rotation_speed;
    let mut rotation_y = delta.x * settings.rotation_speed;

    if settings.invert_x {
        rotation_x = -rotation_x;
    }
    if settings.invert_y {
        rotation_y = -rotation_y;
    }

    (rotation_x, rotation_y)
}

/// Map a `[0, 360)` Euler readout onto `(-180, 180]`
pub fn unwrap_angle(degrees: f32) -> f32 {
    if degrees > 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Pitch of `rotation` as an engine-style readout in `[0, 360)` degrees
pub fn pitch_readout(rotation: Quat) -> f32 {
    let (_, pitch, _) = rotation.to_euler(EulerRot::YXZ);
    let degrees = pitch.to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Saturating clamp that tolerates `min > max`
///
/// The lower bound is checked first, so inverted bounds pin every value to
/// one of them instead of panicking like `f32::clamp`.
pub fn clamp_angle(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Tracked vertical angle of a rotator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalTracker {
    /// Accumulated, clamped vertical angle (degrees)
    pub current: f32,
}

impl VerticalTracker {
    /// Compute the increment for one drag step
    ///
    /// `pitch_readout` is the target's current pitch as reported in
    /// `[0, 360)`. With clamping enabled the returned pitch drives the
    /// target onto the tracked angle, whatever drift has accumulated.
    pub fn step(
        &mut self,
        settings: &RotatorSettings,
        delta: Vec2,
        pitch_readout: f32,
    ) -> RotationIncrement {
        let (mut rotation_x, rotation_y) = raw_rotation(settings, delta);

        if settings.limit_vertical_rotation {
            self.current = clamp_angle(
                self.current - rotation_x,
                settings.min_vertical_angle,
                settings.max_vertical_angle,
            );
            rotation_x = -(self.current - unwrap_angle(pitch_readout));
        }

        RotationIncrement {
            pitch: -rotation_x,
            yaw: rotation_y,
        }
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}
