//! Headless Bevy application setup and execution
//!
//! This module builds an app without a window that drives a single rotator,
//! either from Bevy's input resources or from a host thread through the
//! shared input bridge.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    input::InputPlugin,
    log::LogPlugin,
    prelude::*,
};
use std::thread;
use std::time::Duration;

use crate::config::{RotatorSettings, TARGET_FPS};
use crate::engine::plugins::DragRotatePlugin;
use crate::engine::resources::{RotatorSettingsRes, SharedHostInputRes};
use crate::engine::systems::setup_scene;
use crate::host_bridge::SharedHostInput;

/// Create and configure the headless application
///
/// With `shared_input`, input comes from the host bridge instead of Bevy's
/// own input resources.
pub fn create_app(settings: RotatorSettings, shared_input: Option<SharedHostInput>) -> App {
    let mut app = App::new();

    // Add schedule runner for controlled tick rate
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
        Duration::from_secs_f64(1.0 / TARGET_FPS),
    )));
    app.add_plugins(InputPlugin);
    app.add_plugins(DragRotatePlugin::default());

    app.add_systems(Startup, setup_scene);

    app.insert_resource(RotatorSettingsRes(settings));
    if let Some(shared) = shared_input {
        app.insert_resource(SharedHostInputRes(shared));
    }

    app
}

/// Start the headless app in a background thread
pub fn start_headless(
    settings: RotatorSettings,
    shared_input: SharedHostInput,
) -> thread::JoinHandle<AppExit> {
    thread::spawn(move || {
        let mut app = create_app(settings, Some(shared_input));
        app.add_plugins(LogPlugin::default());
        info!("[DragRotator] Running headless loop...");
        app.run()
    })
}
