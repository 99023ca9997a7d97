//! Physical and kinematic state of a star or planet

use crate::physics::classification::{PlanetClass, SpectralClass, random_planet_color};
use crate::physics::gravity::stable_orbit_inertia;
use crate::physics::math::{Scalar, Vector, to_display_radius};
use bevy::color::Srgba;
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;

/// Radii are scaled by this before cubing when deriving density.
const DENSITY_RADIUS_SCALE: Scalar = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTraits {
    /// `None` for stars built from explicit parameters.
    pub spectral_class: Option<SpectralClass>,
    pub temperature_k: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetTraits {
    /// `None` for planets built from explicit parameters.
    pub planet_class: Option<PlanetClass>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    Star(StarTraits),
    Planet(PlanetTraits),
}

impl BodyKind {
    #[inline]
    pub fn is_star(&self) -> bool {
        matches!(self, BodyKind::Star(_))
    }

    #[inline]
    pub fn is_planet(&self) -> bool {
        matches!(self, BodyKind::Planet(_))
    }

    /// Heading shown above a body's description in the inspection panel.
    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Star(_) => "STAR",
            BodyKind::Planet(_) => "PLANET",
        }
    }
}

/// A simulated body.
///
/// Mass and radius are only changed through [`Body::set_mass`] and
/// [`Body::set_radius`], which keep `density` and `display_radius` derived
/// from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Kilograms
    mass: Scalar,
    density: Scalar,
    /// Kilometres
    radius: Scalar,
    display_radius: u32,
    /// Display units per tick
    pub velocity: Vector,
    /// Display units, origin at the centre of the view
    pub position: Vector,
    color: Srgba,
    kind: BodyKind,
}

impl Body {
    /// Zeroed body awaiting classification or explicit parameters.
    pub fn empty(kind: BodyKind) -> Self {
        Self {
            mass: 0.0,
            density: 0.0,
            radius: 0.0,
            display_radius: 1,
            velocity: Vector::ZERO,
            position: Vector::ZERO,
            color: Srgba::WHITE,
            kind,
        }
    }

    /// Star with a randomly drawn spectral class.
    pub fn star<R: Rng + ?Sized>(position: Vector, rng: &mut R) -> Self {
        let class = SpectralClass::draw(rng);
        Self::star_of_class(class, position, rng)
    }

    pub fn star_of_class<R: Rng + ?Sized>(
        class: SpectralClass,
        position: Vector,
        rng: &mut R,
    ) -> Self {
        let sample = class.sample(rng);
        let mut star = Self::empty(BodyKind::Star(StarTraits {
            spectral_class: Some(class),
            temperature_k: sample.temperature_k,
        }));
        star.mass = sample.mass;
        star.radius = sample.radius;
        star.color = class.color();
        star.position = position;
        star.finish_classification();
        star
    }

    /// Planet with a randomly drawn class, set moving on an approximate orbit
    /// around `star`.
    pub fn planet<R: Rng + ?Sized>(position: Vector, star: &Body, rng: &mut R) -> Self {
        let class = PlanetClass::draw(rng);
        Self::planet_of_class(class, position, star, rng)
    }

    pub fn planet_of_class<R: Rng + ?Sized>(
        class: PlanetClass,
        position: Vector,
        star: &Body,
        rng: &mut R,
    ) -> Self {
        let sample = class.sample(rng);
        let mut planet = Self::empty(BodyKind::Planet(PlanetTraits {
            planet_class: Some(class),
        }));
        planet.mass = sample.mass;
        planet.radius = sample.radius;
        planet.color = random_planet_color(rng);
        planet.position = position;
        planet.finish_classification();
        planet.velocity = stable_orbit_inertia(&planet, star);
        planet
    }

    /// Star from explicit parameters; its spectral class is left unknown.
    pub fn star_with(
        mass: Scalar,
        radius: Scalar,
        velocity: Vector,
        position: Vector,
        temperature_k: Scalar,
    ) -> Self {
        let kind = BodyKind::Star(StarTraits {
            spectral_class: None,
            temperature_k,
        });
        Self::with_parameters(kind, mass, radius, velocity, position)
    }

    /// Planet from explicit parameters; its class is left unknown.
    pub fn planet_with(mass: Scalar, radius: Scalar, velocity: Vector, position: Vector) -> Self {
        let kind = BodyKind::Planet(PlanetTraits { planet_class: None });
        Self::with_parameters(kind, mass, radius, velocity, position)
    }

    fn with_parameters(
        kind: BodyKind,
        mass: Scalar,
        radius: Scalar,
        velocity: Vector,
        position: Vector,
    ) -> Self {
        let mut body = Self::empty(kind);
        body.mass = mass;
        body.radius = radius;
        body.velocity = velocity;
        body.position = position;
        body.color = Srgba::rgb_u8(100, 100, 100);
        body.recompute_derived();
        body
    }

    fn finish_classification(&mut self) {
        self.recompute_derived();
        assert!(
            self.mass > 0.0 && self.radius > 0.0,
            "classification produced a degenerate body: {self}"
        );
    }

    /// Re-derives density and display radius from the current mass and radius.
    pub fn recompute_derived(&mut self) {
        let scaled_radius = self.radius * DENSITY_RADIUS_SCALE;
        let volume = (4.0 / 3.0) * PI * scaled_radius * scaled_radius * scaled_radius;
        self.density = if volume > 0.0 { self.mass / volume } else { 0.0 };
        self.display_radius = to_display_radius(self.radius).max(1) as u32;
    }

    #[inline]
    pub fn integrate_position(&mut self) {
        self.position += self.velocity;
    }

    #[inline]
    pub fn apply_velocity_delta(&mut self, delta: Vector) {
        self.velocity += delta;
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    pub fn set_mass(&mut self, mass: Scalar) {
        self.mass = mass;
        self.recompute_derived();
    }

    #[inline]
    pub fn density(&self) -> Scalar {
        self.density
    }

    #[inline]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn set_radius(&mut self, radius: Scalar) {
        self.radius = radius;
        self.recompute_derived();
    }

    #[inline]
    pub fn display_radius(&self) -> u32 {
        self.display_radius
    }

    #[inline]
    pub fn color(&self) -> Srgba {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    #[inline]
    pub fn is_star(&self) -> bool {
        self.kind.is_star()
    }

    #[inline]
    pub fn is_planet(&self) -> bool {
        self.kind.is_planet()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mass(kg): {}  Density(g/m3): {}  Radius(km): {}",
            self.mass, self.density, self.radius
        )?;

        match &self.kind {
            BodyKind::Star(traits) => {
                let class = traits
                    .spectral_class
                    .map_or_else(|| "Unknown".to_string(), |class| class.to_string());
                write!(
                    f,
                    "  Star Classification: {class}  Temperature(K): {}",
                    traits.temperature_k
                )
            }
            BodyKind::Planet(traits) => {
                let class = traits
                    .planet_class
                    .map_or_else(|| "Unknown".to_string(), |class| class.to_string());
                write!(f, "  Planet Classification: {class}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::{EARTH_RADIUS, PIXEL_UNIT, SOLAR_MASS};
    use crate::resources::SharedRng;

    fn expected_density(body: &Body) -> Scalar {
        let r = body.radius() * 100.0;
        body.mass() / ((4.0 / 3.0) * PI * r * r * r)
    }

    #[test]
    fn test_classified_bodies_have_consistent_derived_values() {
        let mut rng = SharedRng::from_seed(99);

        for _ in 0..500 {
            let star = Body::star(Vector::ZERO, &mut rng);
            let planet = Body::planet(Vector::new(400.0, -250.0), &star, &mut rng);

            for body in [&star, &planet] {
                assert!(body.mass() > 0.0);
                assert!(body.radius() > 0.0);
                assert!(body.display_radius() >= 1);
                assert_eq!(
                    body.display_radius() as Scalar,
                    (body.radius() / PIXEL_UNIT).floor()
                );
                assert!((body.density() - expected_density(body)).abs() <= 1e-12 * body.density());
            }
        }
    }

    #[test]
    fn test_recompute_derived_is_idempotent() {
        let mut rng = SharedRng::from_seed(5);
        let mut star = Body::star(Vector::ZERO, &mut rng);

        star.recompute_derived();
        let (density, display_radius) = (star.density(), star.display_radius());
        star.recompute_derived();

        assert_eq!(star.density(), density);
        assert_eq!(star.display_radius(), display_radius);
    }

    #[test]
    fn test_setters_keep_derived_values_current() {
        let mut body = Body::planet_with(1.0e24, 8_000.0, Vector::ZERO, Vector::ZERO);
        assert_eq!(body.display_radius(), 2);

        body.set_radius(40_000.0);
        assert_eq!(body.display_radius(), 10);
        assert!((body.density() - expected_density(&body)).abs() <= 1e-12 * body.density());

        let before = body.density();
        body.set_mass(2.0e24);
        assert!((body.density() - 2.0 * before).abs() <= 1e-12 * body.density());
    }

    #[test]
    fn test_display_radius_never_below_one() {
        let pebble = Body::planet_with(1.0, 10.0, Vector::ZERO, Vector::ZERO);
        assert_eq!(pebble.display_radius(), 1);

        let smallest_terran = PlanetClass::Terran.sample_at(0.0);
        assert!(smallest_terran.radius >= 0.8 * EARTH_RADIUS - 1e-9);
        assert!(smallest_terran.radius / PIXEL_UNIT >= 1.0);
    }

    #[test]
    fn test_empty_body_is_zeroed() {
        let body = Body::empty(BodyKind::Planet(PlanetTraits { planet_class: None }));

        assert_eq!(body.mass(), 0.0);
        assert_eq!(body.radius(), 0.0);
        assert_eq!(body.density(), 0.0);
        assert_eq!(body.display_radius(), 1);
        assert_eq!(body.position, Vector::ZERO);
        assert_eq!(body.velocity, Vector::ZERO);
    }

    #[test]
    fn test_integrate_position_uses_current_velocity() {
        let mut body = Body::planet_with(1.0, 5_000.0, Vector::new(1.0, -2.0), Vector::ZERO);

        body.apply_velocity_delta(Vector::new(0.5, 0.5));
        body.integrate_position();
        body.integrate_position();

        assert_eq!(body.velocity, Vector::new(1.5, -1.5));
        assert_eq!(body.position, Vector::new(3.0, -3.0));
    }

    #[test]
    fn test_star_of_class_uses_class_color_and_bounds() {
        let mut rng = SharedRng::from_seed(17);
        let star = Body::star_of_class(SpectralClass::B, Vector::ZERO, &mut rng);

        assert_eq!(star.color(), SpectralClass::B.color());
        let BodyKind::Star(traits) = star.kind() else {
            panic!("expected a star");
        };
        assert_eq!(traits.spectral_class, Some(SpectralClass::B));
        assert!(SpectralClass::B.temperature_bounds().contains(traits.temperature_k));
        assert!(star.mass() >= 2.1 * SOLAR_MASS * (1.0 - 1e-12));
    }

    #[test]
    fn test_planet_receives_orbital_velocity() {
        let mut rng = SharedRng::from_seed(23);
        let star = Body::star_of_class(SpectralClass::G, Vector::ZERO, &mut rng);
        let planet = Body::planet(Vector::new(300.0, 0.0), &star, &mut rng);

        assert_eq!(planet.velocity, stable_orbit_inertia(&planet, &star));
        assert!(planet.velocity.y > 0.0);
        assert!(planet.velocity.x.abs() < 1e-12);
    }

    #[test]
    fn test_star_description() {
        let star = Body::star_with(2.0, 1.0, Vector::ZERO, Vector::ZERO, 5000.0);
        let description = star.to_string();

        assert!(description.starts_with("Mass(kg): 2  Density(g/m3): "));
        assert!(description.ends_with("  Star Classification: Unknown  Temperature(K): 5000"));
        assert!(description.contains("  Radius(km): 1  "));
    }

    #[test]
    fn test_planet_description() {
        let mut rng = SharedRng::from_seed(31);
        let star = Body::star(Vector::ZERO, &mut rng);
        let planet =
            Body::planet_of_class(PlanetClass::Jovian, Vector::new(0.0, 500.0), &star, &mut rng);

        assert!(planet.to_string().ends_with("  Planet Classification: Jovian"));
        assert_eq!(planet.kind().label(), "PLANET");
        assert_eq!(star.kind().label(), "STAR");
    }
}
