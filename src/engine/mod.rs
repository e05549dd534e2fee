//! Bevy engine integration
//!
//! This module contains all Bevy-related code including components,
//! resources, messages, systems, plugins, and application setup.

pub mod app;
pub mod components;
pub mod messages;
pub mod plugins;
pub mod resources;
pub mod systems;

// Re-export commonly used items
pub use app::{create_app, start_headless};
pub use components::{DragRotator, ResetButton, RotationReset};
pub use messages::ResetRotation;
pub use plugins::{DragRotatePlugin, RotatorSystems};
pub use resources::{ActiveInputMode, InputFrame};
