//! Bevy systems
//!
//! This module contains all the systems that operate on rotator entities
//! and resources in the Bevy ECS.

pub mod drag;
pub mod input;
pub mod lifecycle;
pub mod reset;
pub mod scene;

pub use drag::drag_rotate;
pub use input::{pull_host_input, sample_native_input};
pub use lifecycle::{bind_reset_buttons, release_reset_buttons};
pub use reset::{advance_reset, emit_reset_on_click, start_reset};
pub use scene::setup_scene;
