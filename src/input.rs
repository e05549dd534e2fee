//! Pointer and touch drag tracking
//!
//! Turns one tick of device state into the screen-space delta that should
//! drive a rotation, following press/release edges for the mouse and the
//! phase of a single touch.

use bevy::math::Vec2;

/// Which kind of device drives rotation
///
/// Chosen once when the plugin is built, never re-detected per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Mouse or other pointer with a primary button (desktop)
    Pointer,
    /// Single-finger touch screen (mobile)
    Touch,
}

impl InputMode {
    /// Default for the compile target
    pub fn for_target() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::for_target()
    }
}

/// Primary mouse button state for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseSample {
    /// Button went down this tick
    pub just_pressed: bool,
    /// Button went up this tick
    pub just_released: bool,
    /// Button is currently held
    pub pressed: bool,
    /// Cursor position in screen space, if the cursor is over the surface
    pub position: Option<Vec2>,
}

/// Phase of a touch as seen on one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchStage {
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub stage: TouchStage,
    pub position: Vec2,
}

/// Press/release tracking for a single drag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    is_rotating: bool,
    last_pointer_position: Vec2,
}

impl DragTracker {
    pub fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    pub fn last_pointer_position(&self) -> Vec2 {
        self.last_pointer_position
    }

    /// Advance with one tick of mouse state, returning the delta to rotate by
    ///
    /// The press tick itself yields a zero delta.
    pub fn track_mouse(&mut self, mouse: &MouseSample) -> Option<Vec2> {
        if mouse.just_pressed {
            self.is_rotating = true;
            if let Some(position) = mouse.position {
                self.last_pointer_position = position;
            }
        } else if mouse.just_released {
            self.is_rotating = false;
        }
        // press and release landing in one tick
        if !mouse.pressed {
            self.is_rotating = false;
        }

        if !self.is_rotating {
            return None;
        }

        let position = mouse.position?;
        let delta = position - self.last_pointer_position;
        self.last_pointer_position = position;
        Some(delta)
    }

    /// Advance with the touches active this tick
    ///
    /// Anything other than exactly one touch stops the drag.
    pub fn track_touches(&mut self, touches: &[TouchSample]) -> Option<Vec2> {
        let [touch] = touches else {
            self.is_rotating = false;
            return None;
        };

        match touch.stage {
            TouchStage::Began => {
                self.is_rotating = true;
                self.last_pointer_position = touch.position;
                None
            }
            TouchStage::Ended | TouchStage::Canceled => {
                self.is_rotating = false;
                None
            }
            TouchStage::Moved if self.is_rotating => {
                let delta = touch.position - self.last_pointer_position;
                self.last_pointer_position = touch.position;
                Some(delta)
            }
            TouchStage::Moved | TouchStage::Stationary => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(just_pressed: bool, just_released: bool, pressed: bool, x: f32, y: f32) -> MouseSample {
        MouseSample {
            just_pressed,
            just_released,
            pressed,
            position: Some(Vec2::new(x, y)),
        }
    }

    fn touch(stage: TouchStage, x: f32, y: f32) -> TouchSample {
        TouchSample {
            stage,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn mouse_drag_yields_deltas() {
        let mut tracker = DragTracker::default();

        assert_eq!(tracker.track_mouse(&mouse(true, false, true, 10.0, 10.0)), Some(Vec2::ZERO));
        assert!(tracker.is_rotating());
        assert_eq!(
            tracker.track_mouse(&mouse(false, false, true, 13.0, 9.0)),
            Some(Vec2::new(3.0, -1.0))
        );
        assert_eq!(tracker.last_pointer_position(), Vec2::new(13.0, 9.0));
    }

    #[test]
    fn release_halts_on_next_tick() {
        let mut tracker = DragTracker::default();
        tracker.track_mouse(&mouse(true, false, true, 0.0, 0.0));
        tracker.track_mouse(&mouse(false, false, true, 5.0, 0.0));

        assert_eq!(tracker.track_mouse(&mouse(false, true, false, 50.0, 0.0)), None);
        assert!(!tracker.is_rotating());
        assert_eq!(tracker.track_mouse(&mouse(false, false, false, 90.0, 0.0)), None);
    }

    #[test]
    fn click_within_one_tick_does_not_start_a_drag() {
        let mut tracker = DragTracker::default();

        assert_eq!(tracker.track_mouse(&mouse(true, true, false, 10.0, 10.0)), None);
        assert!(!tracker.is_rotating());
        assert_eq!(tracker.track_mouse(&mouse(false, false, false, 60.0, 10.0)), None);
        assert!(!tracker.is_rotating());
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.track_mouse(&mouse(false, false, false, 5.0, 5.0)), None);
        assert!(!tracker.is_rotating());
    }

    #[test]
    fn missing_cursor_skips_tick_but_keeps_drag() {
        let mut tracker = DragTracker::default();
        tracker.track_mouse(&mouse(true, false, true, 1.0, 1.0));

        let off_surface = MouseSample {
            pressed: true,
            ..Default::default()
        };
        assert_eq!(tracker.track_mouse(&off_surface), None);
        assert!(tracker.is_rotating());
        assert_eq!(
            tracker.track_mouse(&mouse(false, false, true, 2.0, 4.0)),
            Some(Vec2::new(1.0, 3.0))
        );
    }

    #[test]
    fn single_touch_drag() {
        let mut tracker = DragTracker::default();

        assert_eq!(tracker.track_touches(&[touch(TouchStage::Began, 0.0, 0.0)]), None);
        assert!(tracker.is_rotating());
        assert_eq!(
            tracker.track_touches(&[touch(TouchStage::Moved, 2.0, 3.0)]),
            Some(Vec2::new(2.0, 3.0))
        );
        assert_eq!(tracker.track_touches(&[touch(TouchStage::Stationary, 2.0, 3.0)]), None);
        assert_eq!(tracker.track_touches(&[touch(TouchStage::Ended, 2.0, 3.0)]), None);
        assert!(!tracker.is_rotating());
        assert_eq!(tracker.track_touches(&[touch(TouchStage::Moved, 8.0, 3.0)]), None);
    }

    #[test]
    fn canceled_touch_stops_drag() {
        let mut tracker = DragTracker::default();
        tracker.track_touches(&[touch(TouchStage::Began, 0.0, 0.0)]);
        tracker.track_touches(&[touch(TouchStage::Canceled, 1.0, 0.0)]);
        assert!(!tracker.is_rotating());
    }

    #[test]
    fn multi_touch_never_rotates() {
        let mut tracker = DragTracker::default();
        tracker.track_touches(&[touch(TouchStage::Began, 0.0, 0.0)]);

        let pinch = [touch(TouchStage::Moved, 40.0, 0.0), touch(TouchStage::Moved, 0.0, 40.0)];
        assert_eq!(tracker.track_touches(&pinch), None);
        assert!(!tracker.is_rotating());

        // lifting back to one moving finger does not resume without a new Began
        assert_eq!(tracker.track_touches(&[touch(TouchStage::Moved, 50.0, 0.0)]), None);
        assert_eq!(tracker.track_touches(&[]), None);
    }
}
