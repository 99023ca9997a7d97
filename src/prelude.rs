//! Orrery prelude module
//!
//! Re-exports the types the plugin, binary and tests reach for most often.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

pub use crate::physics::math::{Scalar, Vector};

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States and events
pub use crate::events::SimulationCommand;
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{HoveredBody, InfoPanel, OrbitTrails, PointerPosition, SharedRng};

// Internal re-exports - Simulation
pub use crate::simulation::{BodyId, Inspection, StarSystem};
