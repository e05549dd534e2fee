//! Eased rotation tween
//!
//! A time-driven interpolation from a starting orientation to a target,
//! advanced explicitly once per tick.

use bevy::math::curve::{easing::EaseFunction, Curve};
use bevy::math::Quat;

/// Result of advancing a tween by one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    pub rotation: Quat,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct RotationTween {
    from: Quat,
    to: Quat,
    /// Seconds
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
}

impl RotationTween {
    pub fn new(from: Quat, to: Quat, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Ease-out quartic tween back to the identity orientation
    pub fn to_identity(from: Quat, duration: f32) -> Self {
        Self::new(from, Quat::IDENTITY, duration, EaseFunction::QuarticOut)
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Advance by `dt` seconds
    ///
    /// The final step lands exactly on the target orientation.
    pub fn advance(&mut self, dt: f32) -> TweenStep {
        self.elapsed += dt.max(0.0);
        let t = self.progress();

        if t >= 1.0 {
            return TweenStep {
                rotation: self.to,
                finished: true,
            };
        }

        let eased = self.ease.sample_clamped(t);
        TweenStep {
            rotation: self.from.slerp(self.to, eased),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_exactly_at_target() {
        let from = Quat::from_rotation_y(1.2) * Quat::from_rotation_x(-0.4);
        let mut tween = RotationTween::to_identity(from, 0.2);

        let first = tween.advance(0.05);
        assert!(!first.finished);
        assert!(first.rotation.angle_between(Quat::IDENTITY) < from.angle_between(Quat::IDENTITY));

        tween.advance(0.1);
        let last = tween.advance(0.1);
        assert!(last.finished);
        assert_eq!(last.rotation, Quat::IDENTITY);
    }

    #[test]
    fn ease_out_front_loads_motion() {
        let from = Quat::from_rotation_y(1.0);
        let mut tween = RotationTween::to_identity(from, 1.0);
        let halfway = tween.advance(0.5);

        // quartic ease-out covers 15/16 of the way by t = 0.5
        let remaining = halfway.rotation.angle_between(Quat::IDENTITY);
        assert!((remaining - 1.0 / 16.0).abs() < 1e-3, "remaining {remaining}");
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = RotationTween::to_identity(Quat::from_rotation_z(0.3), 0.0);
        assert_eq!(tween.progress(), 1.0);
        let step = tween.advance(0.0);
        assert!(step.finished);
        assert_eq!(step.rotation, Quat::IDENTITY);
    }

    #[test]
    fn identity_stays_identity() {
        let mut tween = RotationTween::to_identity(Quat::IDENTITY, 0.2);
        let step = tween.advance(0.1);
        assert!(step.rotation.angle_between(Quat::IDENTITY) < 1e-4);
        assert!(tween.advance(0.2).finished);
    }
}
