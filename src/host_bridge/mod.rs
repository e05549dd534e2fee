//! Bridge layer between a host thread and Bevy
//!
//! This module lets code outside the Bevy app feed pointer input and reset
//! clicks into it through thread-safe shared state.

pub mod commands;
pub mod shared_state;

// Re-export commonly used types
pub use commands::{request_reset, send_mouse_input, send_touches};
pub use shared_state::{HostFrame, HostInput, SharedHostInput};
