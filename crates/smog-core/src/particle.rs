//! Simulated point masses
//!
//! A [`Particle`] is the physical state of one graph node: where it is, how
//! fast it moves, the force accumulated on it during the current step and its
//! mass. The node it stands for is kept as an opaque payload.

use crate::geometry::Vector;

/// A point mass carrying a caller payload.
///
/// Accumulated force only grows through [`Particle::add_force`] and is reset
/// to zero by [`Particle::integrate`], so every step starts from zero force.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle<N> {
    position: Vector,
    velocity: Vector,
    force: Vector,
    mass: f64,
    payload: N,
}

impl<N> Particle<N> {
    /// Creates a particle at rest with unit mass.
    ///
    /// # Arguments
    ///
    /// * `position` - Initial position of the particle.
    /// * `payload` - The caller's node this particle stands for.
    pub fn new(position: Vector, payload: N) -> Self {
        Self {
            position,
            velocity: Vector::zero(),
            force: Vector::zero(),
            mass: 1.0,
            payload,
        }
    }

    /// Sets the mass of the particle
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the initial velocity of the particle
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns the current position
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Returns the x coordinate of the current position
    pub fn x(&self) -> f64 {
        self.position.x()
    }

    /// Returns the y coordinate of the current position
    pub fn y(&self) -> f64 {
        self.position.y()
    }

    /// Moves the particle without touching its velocity.
    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    /// Returns the current velocity
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Returns the force accumulated so far in the current step
    pub fn force(&self) -> Vector {
        self.force
    }

    /// Returns the mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the caller's node attached to this particle
    pub fn payload(&self) -> &N {
        &self.payload
    }

    /// Accumulates `force` onto the particle for the current step.
    pub fn add_force(&mut self, force: Vector) {
        self.force += force;
    }

    /// Kinetic energy `m·|v|²/2`.
    pub fn kinetic_energy(&self) -> f64 {
        self.mass * self.velocity.length_squared() / 2.0
    }

    /// Advances the particle by one time step and clears its accumulated force.
    ///
    /// The velocity gains the constant-acceleration term `a·dt²/2` and is
    /// then multiplied by `damping`; the position moves by `v·dt` using the
    /// updated velocity.
    pub fn integrate(&mut self, time_step: f64, damping: f64) {
        let acceleration = Vector::new(self.force.x() / self.mass, self.force.y() / self.mass);
        let half_dt2 = time_step * time_step / 2.0;

        let vx = (self.velocity.x() + acceleration.x() * half_dt2) * damping;
        let vy = (self.velocity.y() + acceleration.y() * half_dt2) * damping;
        self.velocity = Vector::new(vx, vy);

        self.position += self.velocity.scale(time_step);
        self.force = Vector::zero();
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(Vector::new(1.0, 2.0), "a");
        assert_eq!(p.position(), Vector::new(1.0, 2.0));
        assert!(p.velocity().is_zero());
        assert!(p.force().is_zero());
        assert_approx_eq!(f64, p.mass(), 1.0);
        assert_eq!(*p.payload(), "a");
    }

    #[test]
    fn test_add_force_accumulates() {
        let mut p = Particle::new(Vector::zero(), ());
        p.add_force(Vector::new(1.0, 0.0));
        p.add_force(Vector::new(0.5, -2.0));
        assert_eq!(p.force(), Vector::new(1.5, -2.0));
    }

    #[test]
    fn test_integrate_uses_half_dt_squared() {
        let mut p = Particle::new(Vector::zero(), ()).with_mass(2.0);
        p.add_force(Vector::new(4.0, 0.0));

        // a = 2, v = (0 + 2 * 1 / 2) * 0.5 = 0.5, x = 0.5 * 1
        p.integrate(1.0, 0.5);

        assert_approx_eq!(f64, p.velocity().x(), 0.5);
        assert_approx_eq!(f64, p.x(), 0.5);
        assert!(p.force().is_zero());
    }

    #[test]
    fn test_integrate_zero_time_step_keeps_position() {
        let mut p = Particle::new(Vector::new(3.0, -1.0), ()).with_velocity(Vector::new(2.0, 2.0));
        p.add_force(Vector::new(10.0, 10.0));
        p.integrate(0.0, 0.9);

        assert_eq!(p.position(), Vector::new(3.0, -1.0));
        assert_approx_eq!(f64, p.velocity().x(), 1.8);
        assert!(p.force().is_zero());
    }

    #[test]
    fn test_kinetic_energy() {
        let p = Particle::new(Vector::zero(), ())
            .with_mass(2.0)
            .with_velocity(Vector::new(3.0, 4.0));
        assert_approx_eq!(f64, p.kinetic_energy(), 25.0);
    }
}
