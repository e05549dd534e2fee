//! Bevy plugins
//!
//! This module contains the plugin that wires the rotator into an app.

pub mod drag_rotate;

pub use drag_rotate::{DragRotatePlugin, RotatorSystems};
