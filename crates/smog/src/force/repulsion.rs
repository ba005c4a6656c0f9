//! Coulomb-like repulsion between every pair of particles.

use rand::RngCore;

use smog_core::{geometry::Vector, particle::Particle, spring::Spring};

use super::{Force, clamped_distance};

/// Inverse-square repulsion between all particles.
///
/// For a displacement `d` between two particles the magnitude is
/// `constant / dd²` with `dd = max(|d|, 1)`, directed along `d / dd`.
/// Particles that sit exactly on top of each other get no repulsion, the
/// direction vector being zero.
///
/// Cost is quadratic in the number of particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    constant: f64,
}

impl Repulsion {
    /// `ke·q1·q2` with `ke = 0.05` and unit charges.
    pub const DEFAULT_CONSTANT: f64 = 0.05;

    /// Creates a repulsion with the given constant.
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }

    /// Returns the repulsion constant.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Force exerted on a particle displaced by `delta` from another one.
    fn between(&self, delta: Vector) -> Vector {
        let dd = clamped_distance(delta.length());
        let magnitude = self.constant / (dd * dd);
        delta.scale(magnitude / dd)
    }
}

impl Default for Repulsion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONSTANT)
    }
}

impl<N, E> Force<N, E> for Repulsion {
    fn name(&self) -> &'static str {
        "repulsion"
    }

    fn apply(
        &self,
        particles: &mut [Particle<N>],
        _springs: &[Spring<E>],
        _rng: &mut dyn RngCore,
    ) {
        // Each unordered pair is visited once; the pair force is antisymmetric,
        // so both ordered contributions are exact negations of each other.
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let delta = particles[i].position() - particles[j].position();
                let force = self.between(delta);
                particles[i].add_force(force);
                particles[j].add_force(-force);
            }
        }
    }
}
