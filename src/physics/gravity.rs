//! Pairwise gravity, orbital injection and point containment
//!
//! Accelerations are evaluated at physical scale (positions multiplied up by
//! [`PIXEL_UNIT`]) and the resulting per-tick velocity change is scaled back
//! down into display units.

use crate::physics::body::Body;
use crate::physics::math::{
    GRAVITATIONAL_CONSTANT, PIXEL_UNIT, Scalar, Vector, angle, distance, to_display_radius,
};
use std::f64::consts::FRAC_PI_2;

/// Damping applied twice to the raw force: once to the force itself and once
/// to the per-mass velocity term.
const FORCE_DAMPING: Scalar = 1000.0;

/// Signed per-tick velocity term exerted by `b` on `a` at physical distance `d`.
/// Negative values point from `a` towards `b` once projected on the bearing.
#[inline]
fn pull_velocity(a: &Body, b: &Body, d: Scalar) -> Scalar {
    let force = (GRAVITATIONAL_CONSTANT * a.mass() * b.mass()) / (d * d * FORCE_DAMPING);
    -(force / a.mass()) / FORCE_DAMPING
}

#[inline]
fn finite_or_zero(v: Vector) -> Vector {
    if v.is_finite() { v } else { Vector::ZERO }
}

/// Velocity change that `b`'s gravity imparts on `a` over one tick, in display
/// units. Points from `a` towards `b`.
///
/// Coincident bodies exert no pull on each other.
pub fn gravitational_pull(a: &Body, b: &Body) -> Vector {
    let d = distance(a.position, b.position);
    if d == 0.0 {
        return Vector::ZERO;
    }

    let bearing = angle(a.position, b.position);
    let velocity = pull_velocity(a, b, d);

    finite_or_zero(Vector::new(
        velocity * libm::cos(bearing) / PIXEL_UNIT,
        velocity * libm::sin(bearing) / PIXEL_UNIT,
    ))
}

/// Initial velocity putting `planet` on a rough orbit around `star`.
///
/// Uses the same pull magnitude as [`gravitational_pull`], turned a quarter
/// turn clockwise onto the tangent and scaled by the orbital radius in display
/// units: the x axis by half the radius, the y axis by the whole radius. The
/// orbits this produces are visibly elliptical and decay slowly.
pub fn stable_orbit_inertia(planet: &Body, star: &Body) -> Vector {
    let d = distance(planet.position, star.position);
    if d == 0.0 {
        return Vector::ZERO;
    }

    let tangent = angle(planet.position, star.position) - FRAC_PI_2;
    let velocity = pull_velocity(planet, star, d);
    let orbital_radius = d / PIXEL_UNIT;

    finite_or_zero(Vector::new(
        velocity * libm::cos(tangent) * (orbital_radius / 2.0) / PIXEL_UNIT,
        velocity * libm::sin(tangent) * orbital_radius / PIXEL_UNIT,
    ))
}

/// Whether `point` falls within `body`'s display radius.
/// Points at a non-finite distance are never inside.
pub fn is_point_inside_body(point: Vector, body: &Body) -> bool {
    let d = distance(point, body.position);
    d.is_finite() && to_display_radius(d) < i64::from(body.display_radius())
}
