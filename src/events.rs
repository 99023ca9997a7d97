//! Centralized event definitions
//!
//! Input layers (keyboard, pointer, a UI) translate user intent into a
//! [`SimulationCommand`]; the simulation plugin's handlers are the only
//! consumers.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    /// Regenerate a fresh star system
    Restart,
    TogglePause,
    ToggleOrbitTrails,
    /// Primary pointer button pressed at the current [`crate::resources::PointerPosition`]
    Click,
}
