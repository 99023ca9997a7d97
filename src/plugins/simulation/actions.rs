//! Action handlers for simulation commands
//!
//! Handlers for [`SimulationCommand`] events (restart, pause/resume, orbit
//! trails) plus the pointer-driven hover and inspection systems.

use crate::prelude::*;

pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut system: ResMut<StarSystem>,
    mut rng: ResMut<SharedRng>,
    mut hovered: ResMut<HoveredBody>,
    mut panel: ResMut<InfoPanel>,
    config: Res<SimulationConfig>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }

        info!("Restarting simulation");
        *system = StarSystem::generate(&config.generation, &mut *rng);
        **hovered = None;
        *panel = InfoPanel::default();
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        let next = current_state.get().toggled();
        match next {
            AppState::Paused => info!("Simulation paused"),
            AppState::Running => info!("Simulation resumed"),
        }
        next_state.set(next);
    }
}

pub fn handle_toggle_orbit_trails_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut trails: ResMut<OrbitTrails>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::ToggleOrbitTrails) {
            continue;
        }
        trails.enabled = !trails.enabled;
        info!(
            "Orbit trails {}",
            if trails.enabled { "enabled" } else { "disabled" }
        );
    }
}

pub fn update_hovered_body(
    pointer: Res<PointerPosition>,
    system: Res<StarSystem>,
    mut hovered: ResMut<HoveredBody>,
) {
    let pointer: Option<Vector> = **pointer;
    let current = pointer.and_then(|pointer| system.hovered_body(pointer));
    hovered.set_if_neq(HoveredBody(current));
}

/// Refreshes the inspection panel, selecting the hovered body on click.
pub fn update_info_panel(
    mut commands_reader: EventReader<SimulationCommand>,
    pointer: Res<PointerPosition>,
    mut system: ResMut<StarSystem>,
    mut panel: ResMut<InfoPanel>,
) {
    let clicked = commands_reader
        .read()
        .fold(false, |clicked, command| {
            clicked || matches!(command, SimulationCommand::Click)
        });

    let inspection = system.inspect(**pointer, clicked);
    panel.set_if_neq(InfoPanel(inspection));
}
