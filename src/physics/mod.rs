//! Physics and classification core
//!
//! Pure functions and plain data: nothing in here touches the ECS, so the
//! whole module can be exercised directly from tests and benchmarks.

pub mod body;
pub mod classification;
pub mod gravity;
pub mod math;

pub use body::{Body, BodyKind, PlanetTraits, StarTraits};
pub use classification::{PlanetClass, SpectralClass};
pub use gravity::{gravitational_pull, is_point_inside_body, stable_orbit_inertia};
pub use math::{Scalar, Vector};
