//! Particle trail module.
//!
//! This module holds the sparks the avatar sheds as it leaves a cell. Particles live in cell
//! coordinates, drift with a damped velocity and fade out after a short random lifetime.

use rand::Rng;

use crate::interpolation::ContinuousPosition;

/// Number of particles emitted per burst.
pub(crate) const BURST_SIZE: usize = 6;

/// Upper bound of a particle's lifetime in ticks.
pub(crate) const MAX_LIFE: u8 = 24;

/// Lower bound of a particle's lifetime in ticks.
const MIN_LIFE: u8 = 12;

/// Largest initial speed on each axis, in cells per tick.
const MAX_SPEED: f64 = 0.08;

/// Velocity retained from one tick to the next.
const DAMPING: f64 = 0.9;

/// Single spark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Particle {
    /// Current position in cell coordinates.
    pub(crate) position: ContinuousPosition,
    /// Column velocity in cells per tick.
    pub(crate) vx: f64,
    /// Row velocity in cells per tick.
    pub(crate) vy: f64,
    /// Remaining ticks before the particle disappears.
    pub(crate) life: u8,
}

/// Collection of live particles.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ParticleField {
    /// Particles still alive.
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Creates an empty field.
    pub(crate) const fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Returns the live particles.
    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Emits a burst of particles at the given position.
    pub(crate) fn emit<R: Rng + ?Sized>(&mut self, origin: ContinuousPosition, rng: &mut R) {
        self.particles.extend((0..BURST_SIZE).map(|_| Particle {
            position: origin,
            vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            life: rng.gen_range(MIN_LIFE..=MAX_LIFE),
        }));
    }

    /// Moves every particle one tick and drops the ones that burnt out.
    pub(crate) fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.position.x += particle.vx;
            particle.position.y += particle.vy;
            particle.vx *= DAMPING;
            particle.vy *= DAMPING;
            particle.life = particle.life.saturating_sub(1);
        }

        self.particles.retain(|particle| particle.life > 0);
    }

    /// Removes every particle.
    pub(crate) fn clear(&mut self) {
        self.particles.clear();
    }
}
