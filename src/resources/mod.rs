use crate::physics::math::Vector;
use crate::simulation::{BodyId, Inspection};
use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Random source threaded through generation and classification.
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Pointer position in simulation space (origin at the star), written by the
/// input layer. `None` while the pointer is outside the view.
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct PointerPosition(pub Option<Vector>);

/// Body currently under the pointer, refreshed every frame.
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct HoveredBody(pub Option<BodyId>);

/// Whether the renderer should keep fading orbit trails behind bodies.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitTrails {
    pub enabled: bool,
}

/// Content of the inspection panel shown while paused.
#[derive(Resource, Deref, Clone, PartialEq, Debug)]
pub struct InfoPanel(pub Inspection);

impl Default for InfoPanel {
    fn default() -> Self {
        Self(Inspection::Prompt)
    }
}
