//! Error types
//!
//! Configuration loading, reset-button binding and the host bridge are the
//! only fallible paths; the rotation math itself is total.

use bevy::prelude::Entity;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse rotator settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RotatorError {
    /// The rotator names a reset button entity that does not exist
    #[error("rotator {rotator:?} is bound to reset button {button:?}, which does not exist")]
    MissingResetButton { rotator: Entity, button: Entity },

    /// A host thread panicked while holding the shared input lock
    #[error("shared host input lock is poisoned")]
    InputPoisoned,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
