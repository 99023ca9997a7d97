//! Star system generation and the fixed-rate tick

use crate::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    AdvanceSimulation,
}

pub fn generate_star_system(
    mut system: ResMut<StarSystem>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    *system = StarSystem::generate(&config.generation, &mut *rng);
}

pub fn advance_simulation(mut system: ResMut<StarSystem>) {
    system.tick();
}
