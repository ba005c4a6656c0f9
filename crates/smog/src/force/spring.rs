//! Hooke's law attraction along springs.

use rand::{Rng, RngCore};

use smog_core::{geometry::Vector, particle::Particle, spring::Spring};

use super::{Force, clamped_distance};

/// Half-width of the random displacement substituted for coincident endpoints.
const JITTER: f64 = 0.005;

/// Spring force between the two endpoints of every spring.
///
/// The magnitude is `strength · (distance − length)`: positive when the spring
/// is stretched, pulling the endpoints together, negative when compressed,
/// pushing them apart. Each spring adds equal and opposite contributions to
/// its two endpoints.
///
/// When both endpoints coincide the displacement is replaced by a small random
/// vector so that the particles can separate on a later step. Springs whose
/// two ends are the same particle contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringForce;

impl SpringForce {
    /// Creates the spring force.
    pub fn new() -> Self {
        Self
    }
}

/// Random displacement in `[-JITTER, JITTER)` on each axis.
fn jitter(rng: &mut dyn RngCore) -> Vector {
    let x = 2.0 * JITTER * (rng.random::<f64>() - 0.5);
    let y = 2.0 * JITTER * (rng.random::<f64>() - 0.5);
    Vector::new(x, y)
}

impl<N, E> Force<N, E> for SpringForce {
    fn name(&self) -> &'static str {
        "spring"
    }

    fn apply(&self, particles: &mut [Particle<N>], springs: &[Spring<E>], rng: &mut dyn RngCore) {
        for spring in springs {
            if spring.is_self_loop() {
                continue;
            }
            let (source, target) = (spring.source(), spring.target());

            let mut delta = particles[source].position() - particles[target].position();
            let distance = delta.length();
            let dd = clamped_distance(distance);

            if distance == 0.0 {
                delta = jitter(rng);
            }

            let k = spring.strength() * (distance - spring.length());
            let force = delta.scale(-k / dd);

            particles[source].add_force(force);
            particles[target].add_force(-force);
        }
    }
}
