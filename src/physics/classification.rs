//! Stellar and planetary classification tables
//!
//! A class is picked from a uniform draw in `[0, 1)` against cumulative
//! probability bands: the first band whose upper bound exceeds the draw wins
//! and the final class takes whatever probability is left. Within a class the
//! physical attributes are interpolated between the class bounds by a second,
//! independent draw.

use crate::physics::math::{
    Scalar, earth_mass_to_si, earth_radius_to_si, lerp, solar_mass_to_si, solar_radius_to_si,
};
use bevy::color::Srgba;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive interval of a class attribute, in the class's reference unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: Scalar,
    pub high: Scalar,
}

impl Bounds {
    pub const fn new(low: Scalar, high: Scalar) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn at(&self, t: Scalar) -> Scalar {
        lerp(self.low, self.high, t)
    }

    #[inline]
    pub fn contains(&self, value: Scalar) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Physical attributes drawn for a star, already converted to SI-derived units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSample {
    /// Kilograms
    pub mass: Scalar,
    /// Kilometres
    pub radius: Scalar,
    /// Kelvin
    pub temperature_k: Scalar,
}

/// Physical attributes drawn for a planet, already converted to SI-derived units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSample {
    /// Kilograms
    pub mass: Scalar,
    /// Kilometres
    pub radius: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    A,
    B,
}

impl SpectralClass {
    pub const ALL: [SpectralClass; 6] = [
        SpectralClass::M,
        SpectralClass::K,
        SpectralClass::G,
        SpectralClass::F,
        SpectralClass::A,
        SpectralClass::B,
    ];

    /// Cumulative upper bounds; anything at or above the last bound is `B`.
    pub const BANDS: [(Scalar, SpectralClass); 5] = [
        (0.7646, SpectralClass::M),
        (0.8856, SpectralClass::K),
        (0.9616, SpectralClass::G),
        (0.9916, SpectralClass::F),
        (0.9976, SpectralClass::A),
    ];

    pub fn from_draw(r: Scalar) -> Self {
        Self::BANDS
            .iter()
            .find(|(upper, _)| r < *upper)
            .map_or(SpectralClass::B, |(_, class)| *class)
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.random::<Scalar>())
    }

    /// Mass bounds in solar masses.
    pub fn mass_bounds(self) -> Bounds {
        match self {
            SpectralClass::M => Bounds::new(0.08, 0.45),
            SpectralClass::K => Bounds::new(0.45, 0.8),
            SpectralClass::G => Bounds::new(0.8, 1.04),
            SpectralClass::F => Bounds::new(1.04, 1.4),
            SpectralClass::A => Bounds::new(1.4, 2.1),
            SpectralClass::B => Bounds::new(2.1, 16.0),
        }
    }

    /// Radius bounds in solar radii.
    pub fn radius_bounds(self) -> Bounds {
        match self {
            SpectralClass::M => Bounds::new(0.2, 0.7),
            SpectralClass::K => Bounds::new(0.7, 0.96),
            SpectralClass::G => Bounds::new(0.96, 1.15),
            SpectralClass::F => Bounds::new(1.15, 1.4),
            SpectralClass::A => Bounds::new(1.4, 1.8),
            SpectralClass::B => Bounds::new(1.8, 6.6),
        }
    }

    /// Surface temperature bounds in Kelvin.
    pub fn temperature_bounds(self) -> Bounds {
        match self {
            SpectralClass::M => Bounds::new(2400.0, 3700.0),
            SpectralClass::K => Bounds::new(3700.0, 5200.0),
            SpectralClass::G => Bounds::new(5200.0, 6000.0),
            SpectralClass::F => Bounds::new(6000.0, 7500.0),
            SpectralClass::A => Bounds::new(7500.0, 10000.0),
            SpectralClass::B => Bounds::new(10000.0, 30000.0),
        }
    }

    pub fn color(self) -> Srgba {
        match self {
            SpectralClass::M => Srgba::rgb_u8(255, 204, 111),
            SpectralClass::K => Srgba::rgb_u8(255, 210, 161),
            SpectralClass::G => Srgba::rgb_u8(255, 244, 234),
            SpectralClass::F => Srgba::rgb_u8(248, 247, 255),
            SpectralClass::A => Srgba::rgb_u8(202, 215, 255),
            SpectralClass::B => Srgba::rgb_u8(170, 191, 255),
        }
    }

    /// Attributes at position `t` in `[0, 1]` through every range of the class.
    pub fn sample_at(self, t: Scalar) -> StarSample {
        StarSample {
            mass: solar_mass_to_si(self.mass_bounds().at(t)),
            radius: solar_radius_to_si(self.radius_bounds().at(t)),
            temperature_k: self.temperature_bounds().at(t),
        }
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> StarSample {
        self.sample_at(rng.random::<Scalar>())
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SpectralClass::M => "M",
            SpectralClass::K => "K",
            SpectralClass::G => "G",
            SpectralClass::F => "F",
            SpectralClass::A => "A",
            SpectralClass::B => "B",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for SpectralClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown spectral class '{s}' (expected one of M, K, G, F, A, B)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    Jovian,
    Superterran,
    Neptunian,
    Terran,
    Subterran,
    Miniterran,
}

impl PlanetClass {
    pub const ALL: [PlanetClass; 6] = [
        PlanetClass::Jovian,
        PlanetClass::Superterran,
        PlanetClass::Neptunian,
        PlanetClass::Terran,
        PlanetClass::Subterran,
        PlanetClass::Miniterran,
    ];

    /// Cumulative upper bounds; anything at or above the last bound is `Miniterran`.
    pub const BANDS: [(Scalar, PlanetClass); 5] = [
        (0.328, PlanetClass::Jovian),
        (0.59, PlanetClass::Superterran),
        (0.806, PlanetClass::Neptunian),
        (0.973, PlanetClass::Terran),
        (0.988, PlanetClass::Subterran),
    ];

    pub fn from_draw(r: Scalar) -> Self {
        Self::BANDS
            .iter()
            .find(|(upper, _)| r < *upper)
            .map_or(PlanetClass::Miniterran, |(_, class)| *class)
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.random::<Scalar>())
    }

    /// Mass bounds in Earth masses.
    pub fn mass_bounds(self) -> Bounds {
        match self {
            PlanetClass::Jovian => Bounds::new(50.0, 75.0),
            PlanetClass::Superterran => Bounds::new(5.0, 10.0),
            PlanetClass::Neptunian => Bounds::new(10.0, 50.0),
            // TODO: give sub- and mini-terrans their own, smaller ranges
            PlanetClass::Terran | PlanetClass::Subterran | PlanetClass::Miniterran => {
                Bounds::new(0.5, 5.0)
            }
        }
    }

    /// Radius bounds in Earth radii.
    pub fn radius_bounds(self) -> Bounds {
        match self {
            PlanetClass::Jovian => Bounds::new(6.0, 9.0),
            PlanetClass::Superterran => Bounds::new(1.5, 2.5),
            PlanetClass::Neptunian => Bounds::new(2.5, 6.0),
            PlanetClass::Terran | PlanetClass::Subterran | PlanetClass::Miniterran => {
                Bounds::new(0.8, 1.5)
            }
        }
    }

    pub fn sample_at(self, t: Scalar) -> PlanetSample {
        PlanetSample {
            mass: earth_mass_to_si(self.mass_bounds().at(t)),
            radius: earth_radius_to_si(self.radius_bounds().at(t)),
        }
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> PlanetSample {
        self.sample_at(rng.random::<Scalar>())
    }
}

impl fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanetClass::Jovian => "Jovian",
            PlanetClass::Superterran => "Superterran",
            PlanetClass::Neptunian => "Neptunian",
            PlanetClass::Terran => "Terran",
            PlanetClass::Subterran => "Subterran",
            PlanetClass::Miniterran => "Miniterran",
        };
        write!(f, "{name}")
    }
}

/// Muted planet colour with every channel drawn from `50..100`.
pub fn random_planet_color<R: Rng + ?Sized>(rng: &mut R) -> Srgba {
    Srgba::rgb_u8(
        rng.random_range(50..100),
        rng.random_range(50..100),
        rng.random_range(50..100),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::{EARTH_MASS, EARTH_RADIUS, SOLAR_MASS, SOLAR_RADIUS};
    use crate::resources::SharedRng;

    fn just_below(bound: Scalar) -> Scalar {
        bound - 1e-9
    }

    fn within(bounds: Bounds, value: Scalar) -> bool {
        value >= bounds.low - 1e-9 && value <= bounds.high + 1e-9
    }

    #[test]
    fn test_spectral_class_band_boundaries() {
        assert_eq!(SpectralClass::from_draw(0.0), SpectralClass::M);
        assert_eq!(SpectralClass::from_draw(just_below(0.7646)), SpectralClass::M);
        assert_eq!(SpectralClass::from_draw(0.7646), SpectralClass::K);
        assert_eq!(SpectralClass::from_draw(just_below(0.8856)), SpectralClass::K);
        assert_eq!(SpectralClass::from_draw(0.8856), SpectralClass::G);
        assert_eq!(SpectralClass::from_draw(just_below(0.9616)), SpectralClass::G);
        assert_eq!(SpectralClass::from_draw(0.9616), SpectralClass::F);
        assert_eq!(SpectralClass::from_draw(just_below(0.9916)), SpectralClass::F);
        assert_eq!(SpectralClass::from_draw(0.9916), SpectralClass::A);
        assert_eq!(SpectralClass::from_draw(just_below(0.9976)), SpectralClass::A);
        assert_eq!(SpectralClass::from_draw(0.9976), SpectralClass::B);
        assert_eq!(SpectralClass::from_draw(just_below(1.0)), SpectralClass::B);
    }

    #[test]
    fn test_planet_class_band_boundaries() {
        assert_eq!(PlanetClass::from_draw(0.0), PlanetClass::Jovian);
        assert_eq!(PlanetClass::from_draw(just_below(0.328)), PlanetClass::Jovian);
        assert_eq!(PlanetClass::from_draw(0.328), PlanetClass::Superterran);
        assert_eq!(PlanetClass::from_draw(just_below(0.59)), PlanetClass::Superterran);
        assert_eq!(PlanetClass::from_draw(0.59), PlanetClass::Neptunian);
        assert_eq!(PlanetClass::from_draw(just_below(0.806)), PlanetClass::Neptunian);
        assert_eq!(PlanetClass::from_draw(0.806), PlanetClass::Terran);
        assert_eq!(PlanetClass::from_draw(just_below(0.973)), PlanetClass::Terran);
        assert_eq!(PlanetClass::from_draw(0.973), PlanetClass::Subterran);
        assert_eq!(PlanetClass::from_draw(just_below(0.988)), PlanetClass::Subterran);
        assert_eq!(PlanetClass::from_draw(0.988), PlanetClass::Miniterran);
        assert_eq!(PlanetClass::from_draw(just_below(1.0)), PlanetClass::Miniterran);
    }

    #[test]
    fn test_star_samples_stay_within_class_bounds() {
        let mut rng = SharedRng::from_seed(7);

        for class in SpectralClass::ALL {
            for _ in 0..1_000 {
                let sample = class.sample(&mut rng);
                assert!(within(class.mass_bounds(), sample.mass / SOLAR_MASS));
                assert!(within(class.radius_bounds(), sample.radius / SOLAR_RADIUS));
                assert!(class.temperature_bounds().contains(sample.temperature_k));
            }
        }
    }

    #[test]
    fn test_planet_samples_stay_within_class_bounds() {
        let mut rng = SharedRng::from_seed(11);

        for class in PlanetClass::ALL {
            for _ in 0..1_000 {
                let sample = class.sample(&mut rng);
                assert!(within(class.mass_bounds(), sample.mass / EARTH_MASS));
                assert!(within(class.radius_bounds(), sample.radius / EARTH_RADIUS));
            }
        }
    }

    #[test]
    fn test_sample_endpoints_match_bounds() {
        let low = SpectralClass::G.sample_at(0.0);
        let high = SpectralClass::G.sample_at(1.0);

        assert_eq!(low.temperature_k, 5200.0);
        assert_eq!(high.temperature_k, 6000.0);
        assert!((low.mass - 0.8 * SOLAR_MASS).abs() / SOLAR_MASS < 1e-12);
        assert!((high.radius - 1.15 * SOLAR_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn test_terran_family_shares_ranges() {
        for class in [PlanetClass::Subterran, PlanetClass::Miniterran] {
            assert_eq!(class.mass_bounds(), PlanetClass::Terran.mass_bounds());
            assert_eq!(class.radius_bounds(), PlanetClass::Terran.radius_bounds());
        }
    }

    #[test]
    fn test_draw_frequencies_follow_bands() {
        let mut rng = SharedRng::from_seed(2024);
        let draws = 100_000;
        let m_dwarfs = (0..draws)
            .filter(|_| SpectralClass::draw(&mut rng) == SpectralClass::M)
            .count();

        let fraction = m_dwarfs as Scalar / draws as Scalar;
        assert!((fraction - 0.7646).abs() < 0.01, "M fraction was {fraction}");
    }

    #[test]
    fn test_planet_colors_are_muted() {
        let mut rng = SharedRng::from_seed(3);

        for _ in 0..200 {
            let color = random_planet_color(&mut rng);
            for channel in [color.red, color.green, color.blue] {
                assert!((50.0 / 255.0..100.0 / 255.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_spectral_class_from_str() {
        assert_eq!("g".parse::<SpectralClass>(), Ok(SpectralClass::G));
        assert_eq!(" B ".parse::<SpectralClass>(), Ok(SpectralClass::B));
        assert!("O".parse::<SpectralClass>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SpectralClass::K.to_string(), "K");
        assert_eq!(PlanetClass::Neptunian.to_string(), "Neptunian");
    }
}
