//! Scalar and vector types, physical constants and unit conversions
//!
//! Positions and velocities live in display units (one unit is one on-screen
//! pixel). Physical lengths are kilometres and masses are kilograms; the two
//! length scales are tied together by [`PIXEL_UNIT`].

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities and velocity deltas
pub type Vector = bevy::math::DVec2;

pub const GRAVITATIONAL_CONSTANT: Scalar = 6.6726e-11;

/// Kilograms
pub const SOLAR_MASS: Scalar = 1.989e30;

/// Kilometres
pub const SOLAR_RADIUS: Scalar = 6.957e5;

/// Kilograms
pub const EARTH_MASS: Scalar = 5.972e24;

/// Kilometres
pub const EARTH_RADIUS: Scalar = 6.371e3;

/// Kilometres per display unit
pub const PIXEL_UNIT: Scalar = 4000.0;

/// Bearing from `p2` to `p1` in radians, i.e. `atan2(p1.y - p2.y, p1.x - p2.x)`.
#[inline]
pub fn angle(p1: Vector, p2: Vector) -> Scalar {
    libm::atan2(p1.y - p2.y, p1.x - p2.x)
}

/// Physical-scale distance between two display-space points.
#[inline]
pub fn distance(p1: Vector, p2: Vector) -> Scalar {
    let delta = p1 - p2;
    libm::sqrt(delta.x * delta.x + delta.y * delta.y) * PIXEL_UNIT
}

/// Scales a physical length in kilometres down to whole display units.
#[inline]
pub fn to_display_radius(kilometres: Scalar) -> i64 {
    libm::floor(kilometres / PIXEL_UNIT) as i64
}

#[inline]
pub fn solar_mass_to_si(solar_masses: Scalar) -> Scalar {
    solar_masses * SOLAR_MASS
}

#[inline]
pub fn solar_radius_to_si(solar_radii: Scalar) -> Scalar {
    solar_radii * SOLAR_RADIUS
}

#[inline]
pub fn earth_mass_to_si(earth_masses: Scalar) -> Scalar {
    earth_masses * EARTH_MASS
}

#[inline]
pub fn earth_radius_to_si(earth_radii: Scalar) -> Scalar {
    earth_radii * EARTH_RADIUS
}

/// Linear interpolation between `low` and `high` by `t` in [0, 1].
#[inline]
pub fn lerp(low: Scalar, high: Scalar, t: Scalar) -> Scalar {
    low + (high - low) * t
}
