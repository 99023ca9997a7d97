//! The simulated star system
//!
//! [`StarSystem`] owns every body in an ordered arena keyed by [`BodyId`].
//! Ids are never reused, so a stale id held by the UI (hover, selection)
//! simply stops resolving once its body has been absorbed.

use crate::config::GenerationConfig;
use crate::physics::math::{Scalar, Vector};
use crate::physics::{Body, SpectralClass, gravitational_pull, is_point_inside_body};
use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A planet swallowed by a star during collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absorption {
    pub absorbed: BodyId,
    pub star: BodyId,
}

/// What the inspection panel should show this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Inspection {
    Prompt,
    Body {
        id: BodyId,
        title: &'static str,
        description: String,
    },
}

impl Inspection {
    pub const PROMPT: &'static str = "Hover Over Or Click On An Object For More Info";

    pub fn id(&self) -> Option<BodyId> {
        match self {
            Inspection::Prompt => None,
            Inspection::Body { id, .. } => Some(*id),
        }
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspection::Prompt => write!(f, "{}", Self::PROMPT),
            Inspection::Body {
                title, description, ..
            } => write!(f, "{title}\n{description}"),
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct StarSystem {
    bodies: Vec<(BodyId, Body)>,
    next_id: u32,
    selected: Option<BodyId>,
    ticks: u64,
}

impl StarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a star at the origin and scatters planets around it.
    ///
    /// Each planet lands in a random quadrant, up to a third of the viewport
    /// width away on each axis and pushed out by half the star's display
    /// radius, then gets an orbital velocity around the star.
    pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Self {
        let mut system = Self::new();

        let class = config
            .star_class
            .unwrap_or_else(|| SpectralClass::draw(rng));
        let star = Body::star_of_class(class, Vector::ZERO, rng);
        let clearance = Scalar::from(star.display_radius() / 2);
        let reach = config.viewport_width / 3.0;

        let min_planets = config.min_planets.max(1);
        let max_planets = config.max_planets.max(min_planets);
        let planet_count = rng.random_range(min_planets..=max_planets);
        let mut planets = Vec::with_capacity(planet_count);

        for i in 0..planet_count {
            let sign_x: Scalar = if rng.random::<Scalar>() < 0.5 { 1.0 } else { -1.0 };
            let sign_y: Scalar = if rng.random::<Scalar>() < 0.5 { 1.0 } else { -1.0 };
            debug!("Quadrant for planet {i}: {sign_x}, {sign_y}");

            let x = libm::floor(rng.random::<Scalar>() * reach * sign_x) + sign_x * clearance;
            let y = libm::floor(rng.random::<Scalar>() * reach * sign_y) + sign_y * clearance;
            planets.push(Body::planet(Vector::new(x, y), &star, rng));
        }

        info!("Generated a class {class} star with {planet_count} planet(s)");

        system.add_body(star);
        planets.into_iter().for_each(|planet| {
            system.add_body(planet);
        });

        for (id, body) in system.iter() {
            debug!("{} {id}: {body}", body.kind().label());
        }

        system
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push((id, body));
        id
    }

    /// Removes a body, clearing the selection if it pointed at it.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.index_of(id)?;
        let (_, body) = self.bodies.remove(index);

        if self.selected == Some(id) {
            debug!("Selected body {id} left the system; clearing selection");
            self.selected = None;
        }

        Some(body)
    }

    /// Advances the system by one tick: all-pairs gravity, then position
    /// integration, then star collisions.
    pub fn tick(&mut self) -> Option<Absorption> {
        self.apply_gravity();

        for (_, body) in &mut self.bodies {
            body.integrate_position();
        }

        self.ticks += 1;
        self.resolve_collisions()
    }

    fn apply_gravity(&mut self) {
        let count = self.bodies.len();

        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let delta = gravitational_pull(&self.bodies[i].1, &self.bodies[j].1);
                self.bodies[i].1.apply_velocity_delta(delta);
            }
        }
    }

    /// Removes the first non-star body found inside a star. At most one body
    /// is absorbed per call.
    pub fn resolve_collisions(&mut self) -> Option<Absorption> {
        let absorption = self.bodies.iter().find_map(|(absorbed, body)| {
            if body.is_star() {
                return None;
            }
            self.bodies
                .iter()
                .find(|(_, star)| star.is_star() && is_point_inside_body(body.position, star))
                .map(|(star, _)| Absorption {
                    absorbed: *absorbed,
                    star: *star,
                })
        })?;

        if let Some(body) = self.remove_body(absorption.absorbed) {
            info!(
                "Collision: {} {} absorbed by star {}",
                body.kind().label().to_lowercase(),
                absorption.absorbed,
                absorption.star
            );
        }

        Some(absorption)
    }

    /// First body, in collection order, whose display radius covers `pointer`.
    pub fn hovered_body(&self, pointer: Vector) -> Option<BodyId> {
        self.bodies
            .iter()
            .find(|(_, body)| is_point_inside_body(pointer, body))
            .map(|(id, _)| *id)
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected.filter(|id| self.contains(*id))
    }

    /// Selects a body, or clears the selection with `None`. Ids no longer in
    /// the system clear the selection.
    pub fn select(&mut self, id: Option<BodyId>) {
        self.selected = id.filter(|id| self.contains(*id));
    }

    /// Resolves the inspection panel for this frame.
    ///
    /// A click over a body selects it. Hovering a body other than the
    /// selected one shows the hovered body and drops the selection; otherwise
    /// the selection is shown, or a prompt when there is nothing to show.
    pub fn inspect(&mut self, pointer: Option<Vector>, clicked: bool) -> Inspection {
        let hovered = pointer.and_then(|pointer| self.hovered_body(pointer));

        if let Some(hovered) = hovered {
            if clicked {
                self.select(Some(hovered));
            }
            if self.selected() != Some(hovered) {
                self.select(None);
                return self.describe(hovered);
            }
        }

        match self.selected() {
            Some(selected) => self.describe(selected),
            None => Inspection::Prompt,
        }
    }

    fn describe(&self, id: BodyId) -> Inspection {
        match self.get(id) {
            Some(body) => Inspection::Body {
                id,
                title: body.kind().label(),
                description: body.to_string(),
            },
            None => Inspection::Prompt,
        }
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|(body_id, _)| *body_id == id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|index| &self.bodies[index].1)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.index_of(id).map(|index| &mut self.bodies[index].1)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    /// Bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    pub fn star(&self) -> Option<(BodyId, &Body)> {
        self.iter().find(|(_, body)| body.is_star())
    }

    pub fn planet_count(&self) -> usize {
        self.bodies.iter().filter(|(_, body)| body.is_planet()).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of ticks advanced since generation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether every position and velocity is still a finite number.
    pub fn is_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|(_, body)| body.position.is_finite() && body.velocity.is_finite())
    }
}
