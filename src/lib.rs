//! Drag Rotator: pointer and touch drag-to-rotate for Bevy objects
//!
//! A `DragRotator` entity turns drag gestures into world-space rotation of
//! its `Transform`, with optional axis inversion, a clamped vertical angle,
//! and an eased reset back to identity triggered by a UI button.
//!
//! Architecture:
//! - Pure logic (`rotation`, `input`, `tween`) knows nothing about the ECS
//! - `engine` wires it into Bevy as components, systems and a plugin
//! - `host_bridge` lets a thread outside Bevy feed input and reset clicks
//!
//! # Module Structure
//!
//! - `config`: Default constants and serializable settings
//! - `error`: Error types
//! - `rotation`: Drag delta to pitch/yaw math and vertical clamping
//! - `input`: Pointer and single-touch drag tracking
//! - `tween`: Eased reset animation
//! - `host_bridge`: Thread-safe input shared with a host
//!   - `shared_state`: Shared data structures
//!   - `commands`: Host-facing input functions
//! - `engine`: Bevy engine integration
//!   - `components`: ECS components
//!   - `messages`: ECS messages
//!   - `resources`: Global resources
//!   - `plugins`: The rotator plugin
//!   - `systems`: Rotator systems
//!   - `app`: Headless application setup

pub mod config;
pub mod engine;
pub mod error;
pub mod host_bridge;
pub mod input;
pub mod rotation;
pub mod tween;

pub use config::RotatorSettings;
pub use engine::{
    create_app, start_headless, DragRotatePlugin, DragRotator, InputFrame, ResetButton,
    ResetRotation, RotationReset, RotatorSystems,
};
pub use error::{ConfigError, RotatorError};
pub use input::{InputMode, MouseSample, TouchSample, TouchStage};
