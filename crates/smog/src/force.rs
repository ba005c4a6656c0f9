//! Forces acting on the particle system
//!
//! A [`Force`] is a stateless rule that, given the full particle and spring
//! set, adds its contribution to each particle's accumulated force for the
//! current step. A layout applies its forces in registration order; every
//! built-in force only accumulates, so the order does not change the result.

mod repulsion;
mod spring;

pub use repulsion::Repulsion;
pub use spring::SpringForce;

use std::fmt;

use rand::RngCore;

use smog_core::{particle::Particle, spring::Spring};

/// A unit of physics applied once per step.
///
/// Implementations must only read positions and only write through
/// [`Particle::add_force`], so that every force sees the positions the step
/// started with.
pub trait Force<N, E>: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Accumulates this force onto `particles`.
    ///
    /// Spring endpoints index into `particles`. `rng` is the layout's random
    /// source, for forces that need to break ties.
    fn apply(&self, particles: &mut [Particle<N>], springs: &[Spring<E>], rng: &mut dyn RngCore);
}

/// Distance used as divisor, never below one so short range stays finite.
fn clamped_distance(distance: f64) -> f64 {
    if distance < 1.0 { 1.0 } else { distance }
}
