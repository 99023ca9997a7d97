//! Test utilities for plugin testing

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::prelude::*;

/// Creates a minimal headless app with the core Bevy plugins the simulation
/// plugin relies on
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));

    app.add_event::<SimulationCommand>();
    app.init_state::<AppState>();

    app
}

/// Advances time by a fixed `step` on every update instead of wall-clock time,
/// so `FixedUpdate` runs a predictable number of times
pub fn step_time_manually(app: &mut App, step: Duration) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
}

/// Helper to move the pointer, or take it out of the view with `None`
pub fn move_pointer(app: &mut App, position: Option<Vector>) {
    app.world_mut().insert_resource(PointerPosition(position));
}
