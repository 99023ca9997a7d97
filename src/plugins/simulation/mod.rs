//! Simulation plugin - Self-contained plugin pattern
//!
//! Runs a [`StarSystem`] inside a bevy `App`: generation on startup, one tick
//! per `FixedUpdate` while [`AppState::Running`], and the command, hover and
//! inspection systems every frame.

use crate::prelude::*;

mod actions;
mod physics;

use actions::{
    handle_restart_simulation_event, handle_toggle_orbit_trails_event,
    handle_toggle_pause_simulation_event, update_hovered_body, update_info_panel,
};
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};
use physics::{PhysicsSet, advance_simulation, generate_star_system};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Inspection,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config)
            .validated_or_default();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(config.clone());
        app.insert_resource(SharedRng::from_optional_seed(
            config.generation.initial_seed,
        ));
        app.init_resource::<StarSystem>();
        app.init_resource::<PointerPosition>();
        app.init_resource::<HoveredBody>();
        app.init_resource::<InfoPanel>();
        app.insert_resource(OrbitTrails {
            enabled: config.simulation.orbit_trails,
        });
        app.insert_resource(Time::<Fixed>::from_hz(config.simulation.ticks_per_second));

        app.insert_state(AppState::initial(config.simulation.start_paused));
        app.add_event::<SimulationCommand>();

        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Inspection).chain(),
        );

        app.add_systems(Startup, generate_star_system);

        app.add_systems(
            FixedUpdate,
            advance_simulation
                .in_set(PhysicsSet::AdvanceSimulation)
                .run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            (
                handle_restart_simulation_event,
                handle_toggle_pause_simulation_event,
                handle_toggle_orbit_trails_event,
            )
                .in_set(SimulationSet::Input),
        );
        app.add_systems(
            Update,
            (
                update_hovered_body,
                update_info_panel.run_if(in_state(AppState::Paused)),
            )
                .chain()
                .in_set(SimulationSet::Inspection),
        );
    }
}
